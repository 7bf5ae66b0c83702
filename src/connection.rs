//! Live WebSocket feed transport.
//!
//! Wraps a tokio-tungstenite stream behind the [`DataSource`] trait.
//! Connection loss is not a failure mode surfaced to the pipeline: the
//! transport waits out the retry policy's fixed delay and reconnects,
//! without an attempt cap. Only parse errors reach the caller.

use crate::{
    data::{ClientConfig, ConnectionState},
    error::{ClientError, ConnectionError},
    message::FeedMessage,
    parser::parse_message,
    retry::RetryPolicy,
    source::DataSource,
};
use async_trait::async_trait;
use futures_util::StreamExt;
use std::sync::{Arc, Mutex};
use tokio::time::sleep;
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};
use url::Url;

type WsStream = WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>;

/// WebSocket-backed feed source with unconditional reconnection.
pub struct WebSocketSource {
    config: ClientConfig,
    retry: RetryPolicy,
    state: Arc<Mutex<ConnectionState>>,
    stream: Option<WsStream>,
    attempt: u32,
}

impl WebSocketSource {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        config.validate().map_err(ClientError::Configuration)?;
        let retry = RetryPolicy::fixed(config.reconnect_delay);

        Ok(Self {
            config,
            retry,
            state: Arc::new(Mutex::new(ConnectionState::Disconnected)),
            stream: None,
            attempt: 0,
        })
    }

    /// Shared handle for observing the transport state from outside the
    /// message loop.
    pub fn state_handle(&self) -> Arc<Mutex<ConnectionState>> {
        Arc::clone(&self.state)
    }

    fn set_state(&self, state: ConnectionState) {
        *self.state.lock().unwrap() = state;
    }

    /// Single connection attempt with timeout.
    async fn connect_once(&mut self) -> Result<WsStream, ConnectionError> {
        let url = Url::parse(&self.config.endpoint)
            .map_err(|e| ConnectionError::EstablishmentFailed(format!("Invalid URL: {}", e)))?;

        tokio::select! {
            result = connect_async(url) => {
                match result {
                    Ok((ws_stream, _)) => {
                        tracing::info!(endpoint = %self.config.endpoint, "WebSocket connection established");
                        Ok(ws_stream)
                    }
                    Err(e) => Err(ConnectionError::EstablishmentFailed(e.to_string())),
                }
            }
            _ = sleep(self.config.connect_timeout) => {
                Err(ConnectionError::Timeout("Connection timeout".to_string()))
            }
        }
    }

    /// Connect, retrying with the fixed delay until it succeeds.
    async fn ensure_connected(&mut self) {
        if self.stream.is_some() {
            return;
        }

        self.set_state(if self.attempt == 0 {
            ConnectionState::Connecting
        } else {
            ConnectionState::Reconnecting
        });

        loop {
            self.attempt += 1;
            match self.connect_once().await {
                Ok(stream) => {
                    self.stream = Some(stream);
                    self.set_state(ConnectionState::Connected);
                    return;
                }
                Err(e) => {
                    let delay = self.retry.delay_for(self.attempt);
                    tracing::warn!(
                        attempt = self.attempt,
                        error = %e,
                        "Connection attempt failed, retrying in {:?}",
                        delay
                    );
                    self.set_state(ConnectionState::Reconnecting);
                    sleep(delay).await;
                }
            }
        }
    }

    /// Drop the stream and schedule a reconnect.
    async fn handle_disconnect(&mut self, reason: &str) {
        tracing::warn!(reason, "WebSocket connection lost, reconnecting");
        self.stream = None;
        self.set_state(ConnectionState::Reconnecting);
        sleep(self.retry.delay_for(self.attempt)).await;
    }
}

#[async_trait]
impl DataSource for WebSocketSource {
    async fn next_message(&mut self) -> Result<FeedMessage, ClientError> {
        loop {
            self.ensure_connected().await;

            // ensure_connected leaves a live stream in place.
            let Some(stream) = self.stream.as_mut() else {
                continue;
            };

            match stream.next().await {
                Some(Ok(Message::Text(text))) => match parse_message(&text) {
                    Ok(message) => {
                        tracing::trace!(message_type = message.type_name(), "feed message received");
                        return Ok(message);
                    }
                    // Parse failures keep the connection; the caller
                    // decides whether to log or drop the frame.
                    Err(e) => return Err(ClientError::Parse(e)),
                },
                Some(Ok(Message::Ping(_) | Message::Pong(_))) => continue,
                Some(Ok(Message::Close(_))) | None => {
                    self.handle_disconnect("stream closed").await;
                }
                Some(Ok(_)) => continue,
                Some(Err(e)) => {
                    self.handle_disconnect(&e.to_string()).await;
                }
            }
        }
    }

    fn connection_state(&self) -> ConnectionState {
        *self.state.lock().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = ClientConfig {
            endpoint: "http://not-websocket".to_string(),
            ..ClientConfig::default()
        };
        assert!(matches!(
            WebSocketSource::new(config),
            Err(ClientError::Configuration(_))
        ));
    }

    #[test]
    fn test_retry_policy_follows_reconnect_delay() {
        let config = ClientConfig {
            reconnect_delay: Duration::from_secs(3),
            ..ClientConfig::default()
        };
        let source = WebSocketSource::new(config).unwrap();
        assert_eq!(source.retry.delay_for(1), Duration::from_secs(3));
        assert_eq!(source.retry.delay_for(99), Duration::from_secs(3));
    }

    #[test]
    fn test_starts_disconnected() {
        let source = WebSocketSource::new(ClientConfig::default()).unwrap();
        assert_eq!(source.connection_state(), ConnectionState::Disconnected);
    }
}
