//! Per-sender conversation history
//!
//! In-memory only. A record is created on the first message from a sender
//! and dropped when that sender ends the session or disconnects. Matching
//! never reads it.

use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct ConversationHistory {
    records: HashMap<String, Vec<String>>,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty record if the sender has none
    pub fn open(&mut self, sender: &str) {
        self.records.entry(sender.to_string()).or_default();
    }

    pub fn record(&mut self, sender: &str, message: impl Into<String>) {
        self.records
            .entry(sender.to_string())
            .or_default()
            .push(message.into());
    }

    /// Messages so far, empty for an unknown sender
    pub fn messages(&self, sender: &str) -> &[String] {
        self.records.get(sender).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Drop the sender's record. Returns the number of messages discarded.
    pub fn clear(&mut self, sender: &str) -> usize {
        self.records.remove(sender).map_or(0, |r| r.len())
    }

    pub fn contains(&self, sender: &str) -> bool {
        self.records.contains_key(sender)
    }

    pub fn sender_count(&self) -> usize {
        self.records.len()
    }
}
