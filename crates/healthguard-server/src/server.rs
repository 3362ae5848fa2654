//! WebSocket server implementation
//!
//! Accepts WebSocket connections and spawns sessions for each.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use futures::{SinkExt, StreamExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;
use tokio_tungstenite::{accept_async, tungstenite::Message};

use healthguard::Frame;

use crate::router::Router;
use crate::session::Session;

/// WebSocket server
pub struct Server {
    addr: SocketAddr,
    router: Arc<Router>,
}

impl Server {
    /// Create a new server
    pub fn new(addr: SocketAddr, router: Arc<Router>) -> Self {
        Self { addr, router }
    }

    /// Run the server
    pub async fn run(&self) -> Result<()> {
        let listener = TcpListener::bind(&self.addr).await?;
        tracing::info!("WebSocket server listening on {}", self.addr);

        while let Ok((stream, peer_addr)) = listener.accept().await {
            tracing::info!("New connection from {}", peer_addr);
            let router = self.router.clone();

            tokio::spawn(async move {
                if let Err(e) = handle_connection(stream, router).await {
                    tracing::error!("Connection error from {}: {}", peer_addr, e);
                }
                tracing::info!("Connection closed: {}", peer_addr);
            });
        }

        Ok(())
    }
}

/// Decode a text frame, logging and skipping anything malformed
pub(crate) fn decode_frame(text: &str) -> Option<Frame> {
    match Frame::decode(text) {
        Ok(frame) => Some(frame),
        Err(e) => {
            tracing::warn!("Failed to parse frame: {}", e);
            None
        }
    }
}

/// Handle a single WebSocket connection
async fn handle_connection(stream: TcpStream, router: Arc<Router>) -> Result<()> {
    let ws_stream = accept_async(stream).await?;
    let (mut ws_sink, mut ws_source) = ws_stream.split();

    // Channels for session <-> WebSocket communication
    let (tx_to_ws, mut rx_to_ws) = mpsc::unbounded_channel::<Frame>();
    let (tx_from_ws, rx_from_ws) = mpsc::unbounded_channel::<Frame>();

    // Spawn WebSocket writer task
    let writer_handle = tokio::spawn(async move {
        while let Some(frame) = rx_to_ws.recv().await {
            let json = match frame.encode() {
                Ok(j) => j,
                Err(e) => {
                    tracing::error!("Failed to serialize frame: {}", e);
                    continue;
                }
            };
            if let Err(e) = ws_sink.send(Message::Text(json.into())).await {
                tracing::error!("Failed to send WebSocket message: {}", e);
                break;
            }
        }
    });

    // Spawn WebSocket reader task
    let reader_handle = tokio::spawn(async move {
        while let Some(msg) = ws_source.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    if let Some(frame) = decode_frame(&text) {
                        if tx_from_ws.send(frame).is_err() {
                            break;
                        }
                    }
                }
                Ok(Message::Close(_)) => {
                    tracing::debug!("Client sent close frame");
                    break;
                }
                Ok(_) => {
                    // Pings are answered by tungstenite; binary frames are ignored
                }
                Err(e) => {
                    tracing::error!("WebSocket error: {}", e);
                    break;
                }
            }
        }
    });

    let mut session = Session::new(router, tx_to_ws, rx_from_ws);

    tracing::info!("Session {} started", session.id());
    let result = session.run().await;
    tracing::info!("Session {} ended", session.id());

    // Clean up
    writer_handle.abort();
    reader_handle.abort();

    result
}
