//! Health Guardian - keyword-matched health advice agents
//!
//! This crate holds the symptom analysis pipeline and the two chat agents
//! built on it. It has no transport of its own; `healthguard-server` hosts
//! the agents over WebSocket.
//!
//! # Example
//!
//! ```
//! use healthguard::{Analyzer, ChatAgent, ChatMessage, GuardianAgent};
//!
//! // Answer directly, without a separate brain process
//! let mut guardian = GuardianAgent::standalone(Analyzer::builtin());
//!
//! let out = guardian.on_message("user-1", ChatMessage::text("I have a headache"));
//!
//! // The acknowledgement comes first, then the reply
//! let reply = out[1].text_content().unwrap();
//! assert!(reply.contains("**Symptom: Headache**"));
//! ```

mod agents;
mod analyzer;
mod config;
mod emergency;
mod error;
mod format;
mod graph;
mod handoff;
mod history;
mod intent;
mod knowledge;
mod matcher;
pub mod prompts;
mod protocol;

// Re-export the public API
pub use agents::{BrainAgent, ChatAgent, GuardianAgent, Outgoing};
pub use analyzer::{Analysis, Analyzer};
pub use config::{BrainConfig, Config, GuardianConfig, LoggingConfig, DEFAULT_BRAIN_ADDRESS};
pub use emergency::{detect as detect_emergency, is_emergency, EMERGENCY_PHRASES};
pub use error::{Error, Result};
pub use graph::{load_or_fallback as load_knowledge_graph, FactGraph, KnowledgeGraph, NoGraph};
pub use handoff::AnalysisRequest;
pub use history::ConversationHistory;
pub use intent::{classify as classify_intent, Intent};
pub use knowledge::{KnowledgeTable, SymptomEntry};
pub use matcher::{match_symptoms, matched_keys};
pub use protocol::{ChatAcknowledgement, ChatMessage, Content, Frame};
