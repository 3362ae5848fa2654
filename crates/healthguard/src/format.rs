//! Response rendering
//!
//! Matched entries render as one composite message: a section per entry, in
//! the order given, followed by a single shared disclaimer. Nothing is
//! truncated; the output grows linearly with the number of entries.

use crate::intent::Intent;
use crate::knowledge::SymptomEntry;
use crate::prompts;

/// Render the analysis for one or more matched entries
pub fn render_analysis(entries: &[&SymptomEntry], graph_live: bool) -> String {
    let mut out = String::new();
    out.push_str(prompts::ANALYSIS_TITLE);
    out.push_str("\n\n");

    if graph_live {
        out.push_str(prompts::GRAPH_BANNER);
        out.push_str("\n\n");
    }

    for entry in entries {
        render_entry(&mut out, entry);
    }

    out.push_str(prompts::DISCLAIMER);
    out
}

fn render_entry(out: &mut String, entry: &SymptomEntry) {
    out.push_str(&format!("**Symptom: {}**\n\n", entry.title()));

    out.push_str("**Possible Conditions:**\n");
    for (i, condition) in entry.conditions.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, condition));
    }
    out.push('\n');

    out.push_str("**Recommended Actions:**\n");
    for advice in &entry.advice {
        out.push_str(&format!("✓ {}\n", advice));
    }
    out.push('\n');

    if let Some(prevention) = &entry.prevention {
        out.push_str(&format!("🛡️ **Prevention:** {}\n\n", prevention));
    }

    out.push_str(&format!("⚠️ **Warning:** {}\n\n", entry.warning));
}

/// Template reply for input that matched no symptom key
pub fn render_fallback(intent: Intent) -> String {
    match intent {
        Intent::Greeting => prompts::GREETING_RESPONSE,
        Intent::MedicalUnmatched => prompts::MEDICAL_UNMATCHED,
        Intent::Unrelated => prompts::UNRELATED_RESPONSE,
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::KnowledgeTable;
    use pretty_assertions::assert_eq;

    fn rash() -> SymptomEntry {
        SymptomEntry::new("rash", &["Eczema", "Hives"], &["Moisturize"], "See a doctor if it spreads.")
    }

    #[test]
    fn test_single_entry_layout() {
        let entry = rash();
        let out = render_analysis(&[&entry], false);

        let expected = format!(
            "{}\n\n**Symptom: Rash**\n\n**Possible Conditions:**\n1. Eczema\n2. Hives\n\n**Recommended Actions:**\n✓ Moisturize\n\n⚠️ **Warning:** See a doctor if it spreads.\n\n{}",
            prompts::ANALYSIS_TITLE,
            prompts::DISCLAIMER
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_prevention_before_warning() {
        let entry = rash().with_prevention("Use gentle soap.");
        let out = render_analysis(&[&entry], false);

        let prevention = out.find("**Prevention:** Use gentle soap.").unwrap();
        let warning = out.find("**Warning:**").unwrap();
        assert!(prevention < warning);
    }

    #[test]
    fn test_disclaimer_appended_once() {
        let table = KnowledgeTable::builtin();
        let entries: Vec<_> = table.iter().collect();
        let out = render_analysis(&entries, false);

        assert_eq!(out.matches("**Important Disclaimer:**").count(), 1);
        assert!(out.ends_with(prompts::DISCLAIMER));
    }

    #[test]
    fn test_graph_banner() {
        let entry = rash();
        assert!(render_analysis(&[&entry], true).contains(prompts::GRAPH_BANNER));
        assert!(!render_analysis(&[&entry], false).contains(prompts::GRAPH_BANNER));
    }

    #[test]
    fn test_fallback_templates() {
        assert_eq!(render_fallback(Intent::Greeting), prompts::GREETING_RESPONSE);
        assert_eq!(render_fallback(Intent::MedicalUnmatched), prompts::MEDICAL_UNMATCHED);
        assert_eq!(render_fallback(Intent::Unrelated), prompts::UNRELATED_RESPONSE);
    }

    #[test]
    fn test_unmatched_template_names_every_builtin_symptom() {
        for key in KnowledgeTable::builtin().keys() {
            assert!(prompts::MEDICAL_UNMATCHED.contains(key), "template is missing {}", key);
        }
    }
}
