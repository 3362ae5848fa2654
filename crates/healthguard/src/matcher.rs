//! Symptom keyword matching
//!
//! A key matches when it is a substring of the lowercased input, or when its
//! whitespace-stripped form is a substring of the whitespace-stripped input
//! ("chestpain" finds "chest pain"). There are no token boundaries, so a key
//! contained in a longer word still matches.

use crate::knowledge::{KnowledgeTable, SymptomEntry};

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Matched entries, in table order, each at most once
pub fn match_symptoms<'a>(table: &'a KnowledgeTable, text: &str) -> Vec<&'a SymptomEntry> {
    let lower = text.to_lowercase();
    let compact = strip_whitespace(&lower);

    table
        .iter()
        .filter(|entry| {
            lower.contains(entry.name.as_str()) || compact.contains(&strip_whitespace(&entry.name))
        })
        .collect()
}

/// Matched keys, in table order
pub fn matched_keys<'a>(table: &'a KnowledgeTable, text: &str) -> Vec<&'a str> {
    match_symptoms(table, text)
        .into_iter()
        .map(|e| e.name.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_headache_and_fever() {
        let table = KnowledgeTable::builtin();
        assert_eq!(
            matched_keys(&table, "I have a headache and a fever"),
            vec!["headache", "fever"]
        );
    }

    #[test]
    fn test_table_order_not_input_order() {
        let table = KnowledgeTable::builtin();
        assert_eq!(
            matched_keys(&table, "Nausea, then a cough, then a headache"),
            vec!["headache", "cough", "nausea"]
        );
    }

    #[test]
    fn test_repeated_mentions_match_once() {
        let table = KnowledgeTable::builtin();
        assert_eq!(matched_keys(&table, "fever fever FEVER"), vec!["fever"]);
    }

    #[test]
    fn test_whitespace_insensitive() {
        let table = KnowledgeTable::builtin();
        assert_eq!(matched_keys(&table, "chestpain"), vec!["chest pain"]);
        assert_eq!(matched_keys(&table, "my Sore  Throat"), vec!["sore throat"]);
        assert_eq!(matched_keys(&table, "head ache"), vec!["headache"]);
    }

    #[test]
    fn test_substring_inside_longer_word() {
        let table = KnowledgeTable::from_entries([
            SymptomEntry::new("cold", &[], &[], "w"),
        ]);
        assert_eq!(matched_keys(&table, "I feel scolded"), vec!["cold"]);
    }

    #[test]
    fn test_overlapping_keys_both_match() {
        let table = KnowledgeTable::from_entries([
            SymptomEntry::new("pain", &[], &[], "w"),
            SymptomEntry::new("back pain", &[], &[], "w"),
        ]);
        assert_eq!(matched_keys(&table, "lower back pain"), vec!["pain", "back pain"]);
    }

    #[test]
    fn test_idempotent() {
        let table = KnowledgeTable::builtin();
        let input = "Fatigue and DIZZINESS after a cough";
        assert_eq!(matched_keys(&table, input), matched_keys(&table, input));
    }

    #[test]
    fn test_no_match() {
        let table = KnowledgeTable::builtin();
        assert!(match_symptoms(&table, "what's the weather like").is_empty());
    }
}
