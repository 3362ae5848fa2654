use crate::analyzer::Analyzer;
use crate::handoff::AnalysisRequest;
use crate::protocol::{ChatMessage, Content};

use super::{ChatAgent, Outgoing};

/// Answers analysis requests with the rendered analysis
pub struct BrainAgent {
    analyzer: Analyzer,
}

impl BrainAgent {
    pub fn new(analyzer: Analyzer) -> Self {
        Self { analyzer }
    }

    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }
}

impl ChatAgent for BrainAgent {
    fn name(&self) -> &'static str {
        "medical_brain"
    }

    fn on_message(&mut self, sender: &str, msg: ChatMessage) -> Vec<Outgoing> {
        tracing::info!("Received analysis request from {}", sender);
        let mut out = vec![Outgoing::ack(sender, &msg)];

        for item in msg.content {
            match item {
                Content::Text { text } => {
                    tracing::debug!("Analysis request: {}", text);
                    let request = AnalysisRequest::parse(&text);
                    let reply = self.analyzer.respond(&request.query);
                    out.push(Outgoing::text(sender, reply));
                    tracing::info!("Analysis sent back to {}", sender);
                }
                Content::StartSession | Content::EndSession => {
                    tracing::debug!("Ignoring session signal from {}", sender);
                }
            }
        }

        out
    }
}
