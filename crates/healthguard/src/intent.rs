//! Fallback intent classification
//!
//! Only consulted when no symptom key matched. Keywords are compared against
//! whole words, and multi-word keywords against runs of consecutive words.

/// What an unmatched message is about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    MedicalUnmatched,
    Unrelated,
}

pub const GREETING_KEYWORDS: &[&str] = &[
    "hello",
    "hi",
    "hey",
    "greetings",
    "good morning",
    "good afternoon",
    "good evening",
];

pub const MEDICAL_KEYWORDS: &[&str] = &[
    "pain",
    "hurt",
    "hurts",
    "ache",
    "aches",
    "sick",
    "ill",
    "symptom",
    "symptoms",
    "unwell",
    "doctor",
    "medicine",
    "medication",
    "sore",
];

fn words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '\'')
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

fn contains_keyword(words: &[String], keyword: &str) -> bool {
    let parts: Vec<&str> = keyword.split_whitespace().collect();
    if parts.is_empty() || parts.len() > words.len() {
        return false;
    }
    words
        .windows(parts.len())
        .any(|window| window.iter().zip(&parts).all(|(w, p)| w == p))
}

/// Greeting is checked before medical
pub fn classify(text: &str) -> Intent {
    let words = words(text);

    if GREETING_KEYWORDS.iter().any(|k| contains_keyword(&words, k)) {
        Intent::Greeting
    } else if MEDICAL_KEYWORDS.iter().any(|k| contains_keyword(&words, k)) {
        Intent::MedicalUnmatched
    } else {
        Intent::Unrelated
    }
}
