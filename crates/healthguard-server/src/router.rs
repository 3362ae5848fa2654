//! Frame routing between connections and the hosted agent
//!
//! Every connection registers an outbound channel under its address. Inbound
//! frames are handed to the agent one at a time, and the agent's outgoing
//! frames are delivered to whichever connection owns the target address.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{mpsc, Mutex};

use healthguard::{ChatAgent, Frame, Outgoing};

/// Shared routing table plus the agent it serves
pub struct Router {
    agent: Mutex<Box<dyn ChatAgent>>,
    peers: Mutex<HashMap<String, mpsc::UnboundedSender<Frame>>>,
}

impl Router {
    pub fn new(agent: Box<dyn ChatAgent>) -> Arc<Self> {
        Arc::new(Self {
            agent: Mutex::new(agent),
            peers: Mutex::new(HashMap::new()),
        })
    }

    /// Register the outbound channel for an address, replacing any previous one
    pub async fn register(&self, address: &str, tx: mpsc::UnboundedSender<Frame>) {
        let mut agent = self.agent.lock().await;
        let replaced = self.peers.lock().await.insert(address.to_string(), tx);
        if replaced.is_some() {
            tracing::warn!("Replaced existing route for {}", address);
        }
        let outgoing = agent.on_peer_connected(address);
        self.deliver(outgoing).await;
    }

    /// Drop the route for an address and let the agent react to the loss
    pub async fn unregister(&self, address: &str) {
        let mut agent = self.agent.lock().await;
        let removed = self.peers.lock().await.remove(address);
        if removed.is_none() {
            return;
        }
        let outgoing = agent.on_peer_disconnected(address);
        self.deliver(outgoing).await;
    }

    pub async fn has_route(&self, address: &str) -> bool {
        self.peers.lock().await.contains_key(address)
    }

    /// Hand one inbound frame to the agent and deliver its replies
    ///
    /// The agent lock is held until delivery finishes, so replies to one
    /// message are queued before any reply to the next.
    pub async fn dispatch(&self, sender: &str, frame: Frame) {
        let mut agent = self.agent.lock().await;
        let outgoing = agent.handle_frame(sender, frame);
        self.deliver(outgoing).await;
    }

    async fn deliver(&self, outgoing: Vec<Outgoing>) {
        let peers = self.peers.lock().await;
        for Outgoing { to, frame } in outgoing {
            match peers.get(&to) {
                Some(tx) => {
                    if tx.send(frame).is_err() {
                        tracing::warn!("Connection for {} is closed, dropping frame", to);
                    }
                }
                None => tracing::warn!("No route to {}, dropping frame", to),
            }
        }
    }
}
