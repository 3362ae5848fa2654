//! Outbound link from the guardian to the brain agent
//!
//! Opened once at startup. Frames the router addresses to the brain are
//! written to this connection, and frames read from it are dispatched with
//! the brain address as sender. There is no reconnect: once the link drops,
//! the router unregisters the brain and the guardian answers locally.

use std::sync::Arc;

use anyhow::{Context, Result};
use futures::{SinkExt, Stream, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite, tungstenite::Message};

use healthguard::Frame;

use crate::router::Router;
use crate::server::decode_frame;

/// Connect to the brain and register the link under `address`
pub async fn connect_brain(url: &str, address: &str, router: Arc<Router>) -> Result<()> {
    let (ws_stream, _) = connect_async(url)
        .await
        .with_context(|| format!("Failed to connect to brain agent at {}", url))?;
    let (mut ws_sink, mut ws_source) = ws_stream.split();

    let (tx_to_brain, mut rx_to_brain) = mpsc::unbounded_channel::<Frame>();
    router.register(address, tx_to_brain).await;
    tracing::info!("Connected to brain agent at {} as {}", url, address);

    tokio::spawn(async move {
        while let Some(frame) = rx_to_brain.recv().await {
            let json = match frame.encode() {
                Ok(j) => j,
                Err(e) => {
                    tracing::error!("Failed to serialize frame: {}", e);
                    continue;
                }
            };
            if let Err(e) = ws_sink.send(Message::Text(json.into())).await {
                tracing::error!("Failed to send to brain agent: {}", e);
                break;
            }
        }
    });

    let address = address.to_string();
    tokio::spawn(async move {
        pump_frames(ws_source, &address, &router).await;
    });

    Ok(())
}

/// Dispatch frames read from the brain until the link closes, then drop its route
pub(crate) async fn pump_frames<S>(mut source: S, address: &str, router: &Router)
where
    S: Stream<Item = Result<Message, tungstenite::Error>> + Unpin,
{
    while let Some(msg) = source.next().await {
        match msg {
            Ok(Message::Text(text)) => {
                if let Some(frame) = decode_frame(&text) {
                    router.dispatch(address, frame).await;
                }
            }
            Ok(Message::Close(_)) => break,
            Ok(_) => {}
            Err(e) => {
                tracing::error!("Brain link error: {}", e);
                break;
            }
        }
    }
    tracing::warn!("Brain link closed, falling back to local analysis");
    router.unregister(address).await;
}
