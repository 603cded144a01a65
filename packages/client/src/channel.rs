//! Real-time channel to the game server.
//!
//! The WebSocket is split like in a chat client: a writer task drains an
//! unbounded queue of outgoing frames, and a reader task decodes incoming
//! frames into [`ServerEvent`]s for the controller loop. Emitting never waits
//! on the network.

use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::protocol::Message};

use paperfold_shared::protocol::realtime::{ClientEvent, ServerEvent};

use crate::error::ChannelError;

/// Outgoing side of the real-time channel.
#[cfg_attr(test, mockall::automock)]
pub trait RealtimeChannel: Send + Sync {
    /// Queue an event for sending without waiting for delivery.
    fn emit(&self, event: ClientEvent) -> Result<(), ChannelError>;
}

/// WebSocket implementation of [`RealtimeChannel`].
pub struct WebSocketChannel {
    outbound: mpsc::UnboundedSender<String>,
}

impl WebSocketChannel {
    /// Open the WebSocket and spawn its reader and writer tasks.
    ///
    /// Returns the channel handle and the stream of decoded server events.
    /// The stream ends when the server closes the connection; there is no
    /// reconnection.
    pub async fn connect(
        url: &str,
    ) -> Result<(Self, mpsc::UnboundedReceiver<ServerEvent>), ChannelError> {
        let (ws_stream, _response) = connect_async(url)
            .await
            .map_err(|e| ChannelError::Connect(e.to_string()))?;
        tracing::info!("Connected to real-time channel at {}", url);

        let (mut write, mut read) = ws_stream.split();
        let (outbound_tx, mut outbound_rx) = mpsc::unbounded_channel::<String>();
        let (event_tx, event_rx) = mpsc::unbounded_channel::<ServerEvent>();

        tokio::spawn(async move {
            while let Some(text) = outbound_rx.recv().await {
                if let Err(e) = write.send(Message::Text(text.into())).await {
                    tracing::warn!("Failed to send real-time event: {}", e);
                    break;
                }
            }
            let _ = write.close().await;
        });

        tokio::spawn(async move {
            while let Some(message) = read.next().await {
                match message {
                    Ok(Message::Text(text)) => match ServerEvent::decode(text.as_str()) {
                        Ok(event) => {
                            tracing::debug!("Received '{}' event", event.name());
                            if event_tx.send(event).is_err() {
                                break;
                            }
                        }
                        Err(e) => {
                            tracing::warn!("Dropping unrecognized real-time frame: {}", e);
                        }
                    },
                    Ok(Message::Close(_)) => {
                        tracing::info!("Server closed the real-time channel");
                        break;
                    }
                    Err(e) => {
                        tracing::warn!("Real-time channel read error: {}", e);
                        break;
                    }
                    _ => {}
                }
            }
            tracing::info!("Disconnected from real-time channel");
        });

        Ok((
            Self {
                outbound: outbound_tx,
            },
            event_rx,
        ))
    }
}

impl RealtimeChannel for WebSocketChannel {
    fn emit(&self, event: ClientEvent) -> Result<(), ChannelError> {
        let text = event
            .encode()
            .map_err(|e| ChannelError::Encode(e.to_string()))?;
        self.outbound
            .send(text)
            .map_err(|_| ChannelError::Closed)
    }
}
