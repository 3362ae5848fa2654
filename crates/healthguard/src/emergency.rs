//! Emergency phrase detection
//!
//! Runs before any other analysis. A hit short-circuits the pipeline and the
//! caller replies with [`crate::prompts::EMERGENCY_ALERT`], whatever phrase fired.

/// Phrases that always escalate to emergency care
pub const EMERGENCY_PHRASES: &[&str] = &[
    "chest pain",
    "chest-pain",
    "shortness of breath",
    "difficulty breathing",
    "severe bleeding",
    "unconscious",
    "stroke",
    "heart attack",
    "choking",
    "seizure",
];

/// Return the first emergency phrase found in `text`, case-insensitively
pub fn detect(text: &str) -> Option<&'static str> {
    let lower = text.to_lowercase();
    EMERGENCY_PHRASES
        .iter()
        .copied()
        .find(|phrase| lower.contains(phrase))
}

pub fn is_emergency(text: &str) -> bool {
    detect(text).is_some()
}
