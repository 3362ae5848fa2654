//! Symptom analysis pipeline
//!
//! emergency check -> symptom match -> (graph lookup) -> render, or the
//! intent fallback when nothing matched.

use std::sync::Arc;

use crate::emergency;
use crate::format;
use crate::graph::{KnowledgeGraph, NoGraph};
use crate::intent::{self, Intent};
use crate::knowledge::{KnowledgeTable, SymptomEntry};
use crate::prompts;

/// Outcome of classifying one message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Analysis<'a> {
    /// An emergency phrase fired; nothing else was evaluated
    Emergency { phrase: &'static str },
    /// One or more symptom keys matched, in table order
    Symptoms(Vec<&'a SymptomEntry>),
    /// Nothing matched
    Fallback(Intent),
}

/// Stateless analyzer over an immutable table
#[derive(Clone)]
pub struct Analyzer {
    table: Arc<KnowledgeTable>,
    graph: Arc<dyn KnowledgeGraph>,
}

impl Analyzer {
    pub fn new(table: KnowledgeTable, graph: Arc<dyn KnowledgeGraph>) -> Self {
        Self {
            table: Arc::new(table),
            graph,
        }
    }

    /// Built-in table, no graph
    pub fn builtin() -> Self {
        Self::new(KnowledgeTable::builtin(), Arc::new(NoGraph))
    }

    pub fn table(&self) -> &KnowledgeTable {
        &self.table
    }

    pub fn graph_live(&self) -> bool {
        self.graph.is_live()
    }

    pub fn classify(&self, text: &str) -> Analysis<'_> {
        if let Some(phrase) = emergency::detect(text) {
            return Analysis::Emergency { phrase };
        }

        let matched = crate::matcher::match_symptoms(&self.table, text);
        if matched.is_empty() {
            Analysis::Fallback(intent::classify(text))
        } else {
            Analysis::Symptoms(matched)
        }
    }

    /// Full reply text for one message
    pub fn respond(&self, text: &str) -> String {
        match self.classify(text) {
            Analysis::Emergency { phrase } => {
                tracing::warn!("Emergency phrase detected: {}", phrase);
                prompts::EMERGENCY_ALERT.to_string()
            }
            Analysis::Symptoms(entries) => {
                for entry in &entries {
                    self.consult_graph(entry);
                }
                format::render_analysis(&entries, self.graph.is_live())
            }
            Analysis::Fallback(intent) => {
                tracing::debug!("No symptom matched, intent {:?}", intent);
                format::render_fallback(intent)
            }
        }
    }

    fn consult_graph(&self, entry: &SymptomEntry) {
        if !self.graph.is_live() {
            return;
        }
        match self.graph.conditions_for(&entry.name) {
            Some(conditions) => tracing::info!(
                "{} analysis for {}: {}",
                self.graph.name(),
                entry.name,
                conditions.join(", ")
            ),
            None => tracing::debug!("{} has no facts for {}", self.graph.name(), entry.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::FactGraph;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_chest_pain_short_circuits() {
        let analyzer = Analyzer::builtin();
        for input in ["chest pain", "I have CHEST PAIN and a headache", "Chest-Pain"] {
            assert!(matches!(analyzer.classify(input), Analysis::Emergency { .. }));
            assert_eq!(analyzer.respond(input), prompts::EMERGENCY_ALERT);
        }
    }

    #[test]
    fn test_compact_chest_pain_reaches_entry() {
        let analyzer = Analyzer::builtin();
        let reply = analyzer.respond("chestpain");
        assert!(reply.contains("**Symptom: Chest pain**"));
        assert!(reply.contains("CALL EMERGENCY SERVICES IMMEDIATELY"));
    }

    #[test]
    fn test_greeting_template() {
        let analyzer = Analyzer::builtin();
        assert_eq!(analyzer.respond("Hello!"), prompts::GREETING_RESPONSE);
        assert_eq!(analyzer.respond("hey there"), prompts::GREETING_RESPONSE);
    }

    #[test]
    fn test_headache_and_fever_warnings_in_order() {
        let analyzer = Analyzer::builtin();
        let reply = analyzer.respond("I have a headache and a fever");

        let table = analyzer.table();
        let headache = reply.find(&table.get("headache").unwrap().warning).unwrap();
        let fever = reply.find(&table.get("fever").unwrap().warning).unwrap();
        assert!(headache < fever);
        assert!(!reply.contains("**Symptom: Cough**"));
    }

    #[test]
    fn test_classify_symptoms() {
        let analyzer = Analyzer::builtin();
        match analyzer.classify("Fever and a cough") {
            Analysis::Symptoms(entries) => {
                let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
                assert_eq!(names, vec!["fever", "cough"]);
            }
            other => panic!("unexpected analysis: {:?}", other),
        }
    }

    #[test]
    fn test_unrelated_fallback() {
        let analyzer = Analyzer::builtin();
        assert_eq!(
            analyzer.classify("tell me a joke"),
            Analysis::Fallback(Intent::Unrelated)
        );
        assert_eq!(analyzer.respond("tell me a joke"), prompts::UNRELATED_RESPONSE);
    }

    #[test]
    fn test_graph_banner_when_live() {
        let graph = FactGraph::parse("(symptom-condition fever flu)");
        let analyzer = Analyzer::new(KnowledgeTable::builtin(), Arc::new(graph));

        assert!(analyzer.graph_live());
        assert!(analyzer.respond("fever").contains(prompts::GRAPH_BANNER));
        // Emergency and fallback replies never carry the banner
        assert_eq!(analyzer.respond("hello"), prompts::GREETING_RESPONSE);
    }
}
