//! Optional knowledge graph capability
//!
//! The brain agent can consult a fact graph for every matched symptom. The
//! graph never changes the reply text beyond a banner; its results are logged.
//! When no graph file is configured, or it cannot be loaded, [`NoGraph`] is
//! used and the only trace of the failure is a startup log line.
//!
//! # File Format
//!
//! ```text
//! ; comments start with a semicolon
//! (symptom-condition headache migraine)
//! (symptom-condition chest-pain heart-attack)
//! ```
//!
//! Symptoms are written with hyphens in place of spaces. Lines with any other
//! shape are skipped.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::error::{Error, Result};

const CONDITION_RELATION: &str = "symptom-condition";

/// A source of extra facts about symptoms
pub trait KnowledgeGraph: Send + Sync {
    /// Display name for logging
    fn name(&self) -> &'static str;

    /// Whether this graph actually holds facts
    fn is_live(&self) -> bool {
        true
    }

    /// Conditions linked to a symptom key (spaces or hyphens accepted)
    fn conditions_for(&self, symptom: &str) -> Option<Vec<String>>;
}

/// Fallback used when no graph is available
#[derive(Debug, Default, Clone, Copy)]
pub struct NoGraph;

impl KnowledgeGraph for NoGraph {
    fn name(&self) -> &'static str {
        "none"
    }

    fn is_live(&self) -> bool {
        false
    }

    fn conditions_for(&self, _symptom: &str) -> Option<Vec<String>> {
        None
    }
}

/// Graph of `(symptom-condition <symptom> <condition>)` facts
#[derive(Debug, Default)]
pub struct FactGraph {
    conditions: HashMap<String, Vec<String>>,
}

fn graph_key(symptom: &str) -> String {
    symptom.trim().to_lowercase().replace(' ', "-")
}

impl FactGraph {
    /// Parse facts from text. Malformed lines are skipped.
    pub fn parse(source: &str) -> Self {
        let mut graph = Self::default();

        for (idx, line) in source.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(';') {
                continue;
            }

            let Some(body) = line.strip_prefix('(').and_then(|l| l.strip_suffix(')')) else {
                tracing::debug!("Skipping graph line {}: not an expression", idx + 1);
                continue;
            };

            let tokens: Vec<&str> = body.split_whitespace().collect();
            match tokens.as_slice() {
                [CONDITION_RELATION, symptom, condition] => {
                    graph
                        .conditions
                        .entry(graph_key(symptom))
                        .or_default()
                        .push(condition.to_string());
                }
                _ => {
                    tracing::debug!("Skipping graph line {}: unsupported fact", idx + 1);
                }
            }
        }

        graph
    }

    /// Read and parse a graph file
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| Error::GraphRead {
            path: path.to_path_buf(),
            source,
        })?;

        let graph = Self::parse(&source);
        if graph.conditions.is_empty() {
            return Err(Error::GraphEmpty {
                path: path.to_path_buf(),
            });
        }
        Ok(graph)
    }

    pub fn symptom_count(&self) -> usize {
        self.conditions.len()
    }
}

impl KnowledgeGraph for FactGraph {
    fn name(&self) -> &'static str {
        "fact-graph"
    }

    fn conditions_for(&self, symptom: &str) -> Option<Vec<String>> {
        self.conditions.get(&graph_key(symptom)).cloned()
    }
}

/// Load the configured graph, degrading to [`NoGraph`] on any failure
pub fn load_or_fallback(path: Option<&Path>) -> Arc<dyn KnowledgeGraph> {
    let Some(path) = path else {
        tracing::info!("No knowledge graph configured, using built-in table only");
        return Arc::new(NoGraph);
    };

    match FactGraph::load(path) {
        Ok(graph) => {
            tracing::info!(
                "Knowledge graph loaded from {} ({} symptoms)",
                path.display(),
                graph.symptom_count()
            );
            Arc::new(graph)
        }
        Err(e) => {
            tracing::warn!("{}; falling back to built-in table", e);
            Arc::new(NoGraph)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
; sample graph
(symptom-condition headache migraine)
(symptom-condition headache tension-headache)
(symptom-condition chest-pain angina)
(is-a migraine neurological)
not a fact
"#;

    #[test]
    fn test_parse_conditions() {
        let graph = FactGraph::parse(SAMPLE);
        assert_eq!(graph.symptom_count(), 2);
        assert_eq!(
            graph.conditions_for("headache"),
            Some(vec!["migraine".to_string(), "tension-headache".to_string()])
        );
    }

    #[test]
    fn test_spaces_map_to_hyphens() {
        let graph = FactGraph::parse(SAMPLE);
        assert_eq!(graph.conditions_for("chest pain"), Some(vec!["angina".to_string()]));
        assert_eq!(graph.conditions_for("Chest-Pain"), Some(vec!["angina".to_string()]));
    }

    #[test]
    fn test_shipped_graph_covers_builtin_table() {
        let graph = FactGraph::parse(include_str!("../../../knowledge/medical.graph"));
        for key in crate::knowledge::KnowledgeTable::builtin().keys() {
            assert!(graph.conditions_for(key).is_some(), "no facts for {}", key);
        }
    }

    #[test]
    fn test_unknown_symptom() {
        let graph = FactGraph::parse(SAMPLE);
        assert_eq!(graph.conditions_for("fever"), None);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let graph = FactGraph::load(file.path()).unwrap();
        assert!(graph.is_live());
        assert_eq!(graph.symptom_count(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = FactGraph::load(&dir.path().join("missing.graph"));
        assert!(matches!(result, Err(Error::GraphRead { .. })));
    }

    #[test]
    fn test_load_file_without_facts() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"; nothing here\n").unwrap();

        let result = FactGraph::load(file.path());
        assert!(matches!(result, Err(Error::GraphEmpty { .. })));
    }

    #[test]
    fn test_fallback_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.graph");
        let graph = load_or_fallback(Some(missing.as_path()));
        assert!(!graph.is_live());
        assert_eq!(graph.name(), "none");

        assert!(!load_or_fallback(None).is_live());
    }
}
