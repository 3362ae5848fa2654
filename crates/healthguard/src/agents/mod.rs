//! Chat agents
//!
//! An agent turns one inbound frame into a list of outgoing frames, each
//! addressed to a peer. Agents never touch the transport: the host decodes
//! frames, calls [`ChatAgent::handle_frame`] with exclusive access, and routes
//! whatever comes back.
//!
//! - [`GuardianAgent`]: user-facing. Greets, keeps per-sender history, and
//!   forwards text to the brain while it is connected, answering locally
//!   otherwise.
//! - [`BrainAgent`]: analysis only. Parses hand-off payloads and replies with
//!   the rendered analysis.

mod brain;
mod guardian;

pub use brain::BrainAgent;
pub use guardian::GuardianAgent;

use crate::protocol::{ChatAcknowledgement, ChatMessage, Frame};

/// A frame addressed to a peer
#[derive(Debug, Clone, PartialEq)]
pub struct Outgoing {
    pub to: String,
    pub frame: Frame,
}

impl Outgoing {
    pub fn new(to: impl Into<String>, frame: impl Into<Frame>) -> Self {
        Self {
            to: to.into(),
            frame: frame.into(),
        }
    }

    /// Acknowledgement echoing `msg`'s id
    pub fn ack(to: &str, msg: &ChatMessage) -> Self {
        Self::new(to, ChatAcknowledgement::for_message(msg))
    }

    /// Single-text chat message
    pub fn text(to: &str, text: impl Into<String>) -> Self {
        Self::new(to, ChatMessage::text(text))
    }

    /// Text of the carried message, if it is a chat message
    pub fn text_content(&self) -> Option<String> {
        match &self.frame {
            Frame::Message(msg) => msg.text_content(),
            _ => None,
        }
    }
}

/// Common interface for hosted agents
pub trait ChatAgent: Send {
    /// Agent name for logging and the startup banner
    fn name(&self) -> &'static str;

    /// Handle a chat message. Implementations acknowledge it first.
    fn on_message(&mut self, sender: &str, msg: ChatMessage) -> Vec<Outgoing>;

    /// Handle a delivery acknowledgement
    fn on_acknowledgement(&mut self, sender: &str, ack: &ChatAcknowledgement) {
        tracing::info!(
            "Message {} acknowledged by {}",
            ack.acknowledged_msg_id,
            sender
        );
    }

    /// A route to `address` was registered
    fn on_peer_connected(&mut self, _address: &str) -> Vec<Outgoing> {
        Vec::new()
    }

    /// The route to `address` is gone; the peer can no longer be reached
    fn on_peer_disconnected(&mut self, _address: &str) -> Vec<Outgoing> {
        Vec::new()
    }

    /// Dispatch one inbound frame
    fn handle_frame(&mut self, sender: &str, frame: Frame) -> Vec<Outgoing> {
        match frame {
            Frame::Message(msg) => self.on_message(sender, msg),
            Frame::Acknowledgement(ack) => {
                self.on_acknowledgement(sender, &ack);
                Vec::new()
            }
            Frame::Connected { session_id } => {
                tracing::debug!("{}: ignoring connected frame ({}) from {}", self.name(), session_id, sender);
                Vec::new()
            }
        }
    }
}
