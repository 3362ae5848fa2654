//! Per-connection session management
//!
//! Each accepted WebSocket connection gets a Session. Its id is the sender id
//! the agent sees for every frame on that connection.

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;

use healthguard::Frame;

use crate::router::Router;

/// Per-connection session state
pub struct Session {
    /// Unique session identifier, also the peer's address
    id: String,

    router: Arc<Router>,

    /// Channel to send frames to the WebSocket writer task
    ws_tx: mpsc::UnboundedSender<Frame>,

    /// Channel to receive frames from the WebSocket reader task
    ws_rx: mpsc::UnboundedReceiver<Frame>,
}

impl Session {
    /// Create a new session with the given WebSocket channels
    pub fn new(
        router: Arc<Router>,
        ws_tx: mpsc::UnboundedSender<Frame>,
        ws_rx: mpsc::UnboundedReceiver<Frame>,
    ) -> Self {
        Self {
            id: format!("user-{}", uuid::Uuid::new_v4()),
            router,
            ws_tx,
            ws_rx,
        }
    }

    /// Get the session ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Main event loop
    pub async fn run(&mut self) -> Result<()> {
        self.router.register(&self.id, self.ws_tx.clone()).await;

        self.ws_tx
            .send(Frame::Connected {
                session_id: self.id.clone(),
            })
            .map_err(|_| anyhow::anyhow!("WebSocket channel closed"))?;

        while let Some(frame) = self.ws_rx.recv().await {
            self.router.dispatch(&self.id, frame).await;
        }

        tracing::info!("Session {}: client disconnected", self.id);
        self.router.unregister(&self.id).await;
        Ok(())
    }
}
