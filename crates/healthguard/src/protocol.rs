//! Chat protocol definitions
//!
//! Defines the frames exchanged between users and agents, and between the two
//! agents. Every frame is a JSON object tagged by `"type"`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;

// ============================================================================
// Chat Content
// ============================================================================

/// One content item of a chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Content {
    /// Session start signal
    StartSession,
    /// Free text
    Text { text: String },
    /// Session end signal
    EndSession,
}

/// A chat message carrying one or more content items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub msg_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub content: Vec<Content>,
}

impl ChatMessage {
    pub fn new(content: Vec<Content>) -> Self {
        Self {
            msg_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            content,
        }
    }

    /// Message with a single text item
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(vec![Content::Text { text: text.into() }])
    }

    /// Concatenated text items, if any
    pub fn text_content(&self) -> Option<String> {
        let texts: Vec<&str> = self
            .content
            .iter()
            .filter_map(|c| match c {
                Content::Text { text } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        if texts.is_empty() {
            None
        } else {
            Some(texts.join("\n"))
        }
    }
}

/// Delivery acknowledgement for a chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatAcknowledgement {
    pub acknowledged_msg_id: Uuid,
    pub timestamp: DateTime<Utc>,
}

impl ChatAcknowledgement {
    pub fn for_message(msg: &ChatMessage) -> Self {
        Self {
            acknowledged_msg_id: msg.msg_id,
            timestamp: Utc::now(),
        }
    }
}

// ============================================================================
// Frames
// ============================================================================

/// Top-level frame on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Frame {
    /// Sent by the host when a connection is accepted
    Connected { session_id: String },

    Message(ChatMessage),

    Acknowledgement(ChatAcknowledgement),
}

impl Frame {
    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn decode(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

impl From<ChatMessage> for Frame {
    fn from(msg: ChatMessage) -> Self {
        Frame::Message(msg)
    }
}

impl From<ChatAcknowledgement> for Frame {
    fn from(ack: ChatAcknowledgement) -> Self {
        Frame::Acknowledgement(ack)
    }
}
