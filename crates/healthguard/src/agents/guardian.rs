use std::collections::VecDeque;

use crate::analyzer::Analyzer;
use crate::handoff::AnalysisRequest;
use crate::history::ConversationHistory;
use crate::prompts;
use crate::protocol::{ChatMessage, Content};

use super::{ChatAgent, Outgoing};

/// A forwarded request still waiting on the brain
struct PendingReply {
    user: String,
    query: String,
}

/// User-facing agent
///
/// With a brain address configured, free text is forwarded while the brain's
/// route is up and answered locally while it is down. Requests still waiting
/// when the brain goes away are answered locally too.
pub struct GuardianAgent {
    analyzer: Analyzer,
    brain_address: Option<String>,
    brain_online: bool,
    history: ConversationHistory,
    /// Oldest first; brain replies are matched in arrival order
    pending: VecDeque<PendingReply>,
}

impl GuardianAgent {
    /// Forward to the brain at `brain_address` once its route is registered
    pub fn forwarding(brain_address: impl Into<String>, analyzer: Analyzer) -> Self {
        Self {
            brain_address: Some(brain_address.into()),
            ..Self::standalone(analyzer)
        }
    }

    /// Always answer locally
    pub fn standalone(analyzer: Analyzer) -> Self {
        Self {
            analyzer,
            brain_address: None,
            brain_online: false,
            history: ConversationHistory::new(),
            pending: VecDeque::new(),
        }
    }

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    pub fn pending_replies(&self) -> usize {
        self.pending.len()
    }

    pub fn brain_online(&self) -> bool {
        self.brain_online
    }

    fn is_brain(&self, address: &str) -> bool {
        self.brain_address.as_deref() == Some(address)
    }

    /// Relay brain replies to the users waiting on them
    fn relay_brain_reply(&mut self, sender: &str, msg: ChatMessage) -> Vec<Outgoing> {
        let mut out = vec![Outgoing::ack(sender, &msg)];

        for item in msg.content {
            let Content::Text { text } = item else {
                continue;
            };
            match self.pending.pop_front() {
                Some(waiting) => {
                    tracing::info!("Relaying analysis to {}", waiting.user);
                    out.push(Outgoing::text(&waiting.user, text));
                }
                None => {
                    tracing::warn!("Dropping reply from {}: no user is waiting", sender);
                }
            }
        }

        out
    }

    fn handle_text(&mut self, sender: &str, text: String, out: &mut Vec<Outgoing>) {
        tracing::debug!("User message: {}", text);
        self.history.record(sender, text.as_str());

        match self.brain_address.as_deref() {
            Some(brain_address) if self.brain_online => {
                let request = AnalysisRequest::new(text.as_str(), self.history.messages(sender).to_vec());
                tracing::info!("Forwarding message from {} to {}", sender, brain_address);
                out.push(Outgoing::text(brain_address, request.encode()));
                out.push(Outgoing::text(sender, prompts::ANALYZING_MESSAGE));
                self.pending.push_back(PendingReply {
                    user: sender.to_string(),
                    query: text,
                });
            }
            Some(brain_address) => {
                tracing::warn!("{} is offline, answering {} locally", brain_address, sender);
                out.push(Outgoing::text(sender, self.analyzer.respond(&text)));
            }
            None => out.push(Outgoing::text(sender, self.analyzer.respond(&text))),
        }
    }
}

impl ChatAgent for GuardianAgent {
    fn name(&self) -> &'static str {
        "health_guardian"
    }

    fn on_message(&mut self, sender: &str, msg: ChatMessage) -> Vec<Outgoing> {
        tracing::info!("Received message from {}", sender);

        if self.is_brain(sender) {
            return self.relay_brain_reply(sender, msg);
        }

        let mut out = vec![Outgoing::ack(sender, &msg)];

        for item in msg.content {
            match item {
                Content::StartSession => {
                    tracing::info!("Session started with {}", sender);
                    self.history.open(sender);
                    out.push(Outgoing::text(sender, prompts::WELCOME_MESSAGE));
                }
                Content::Text { text } => self.handle_text(sender, text, &mut out),
                Content::EndSession => {
                    tracing::info!("Session ended with {}", sender);
                    let discarded = self.history.clear(sender);
                    tracing::debug!("Discarded {} messages for {}", discarded, sender);
                    out.push(Outgoing::text(sender, prompts::GOODBYE_MESSAGE));
                }
            }
        }

        out
    }

    fn on_peer_connected(&mut self, address: &str) -> Vec<Outgoing> {
        if self.is_brain(address) {
            tracing::info!("Brain link up: {}", address);
            self.brain_online = true;
        }
        Vec::new()
    }

    fn on_peer_disconnected(&mut self, address: &str) -> Vec<Outgoing> {
        if !self.is_brain(address) {
            let discarded = self.history.clear(address);
            tracing::debug!("{} disconnected, discarded {} messages", address, discarded);
            return Vec::new();
        }

        self.brain_online = false;
        tracing::warn!(
            "Brain link down: {}, answering {} waiting users locally",
            address,
            self.pending.len()
        );
        let analyzer = &self.analyzer;
        self.pending
            .drain(..)
            .map(|waiting| Outgoing::text(&waiting.user, analyzer.respond(&waiting.query)))
            .collect()
    }
}
