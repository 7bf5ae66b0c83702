//! Unified data source abstraction.
//!
//! The dashboard historically had two feed paths, a static-fixture
//! poller and a live WebSocket push feed, each wired separately into the
//! view. Both are modelled here as a [`DataSource`] yielding the same
//! inbound-message shape, so a single pipeline consumes either.

use crate::{
    data::ConnectionState,
    error::ClientError,
    message::FeedMessage,
    parser::parse_message,
};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::time::Duration;
use tokio::time::sleep;

/// A source of inbound feed messages.
#[async_trait]
pub trait DataSource: Send {
    /// Wait for and return the next feed message.
    async fn next_message(&mut self) -> Result<FeedMessage, ClientError>;

    /// Current transport state. Sources without a connection (such as
    /// fixture playback) report `Connected`.
    fn connection_state(&self) -> ConnectionState {
        ConnectionState::Connected
    }
}

/// Fixture playback source.
///
/// Replays pre-loaded message frames in a loop: each frame is a batch of
/// messages broadcast together (order book, trades, OHLC, time series,
/// news), with a fixed pause between frames, wrapping around at the end.
#[derive(Debug)]
pub struct FixtureSource {
    frames: Vec<Vec<FeedMessage>>,
    interval: Duration,
    cursor: usize,
    pending: VecDeque<FeedMessage>,
    started: bool,
}

impl FixtureSource {
    pub fn new(interval: Duration) -> Self {
        Self {
            frames: Vec::new(),
            interval,
            cursor: 0,
            pending: VecDeque::new(),
            started: false,
        }
    }

    /// Append one broadcast frame.
    pub fn push_frame(&mut self, frame: Vec<FeedMessage>) -> &mut Self {
        self.frames.push(frame);
        self
    }

    /// Append a frame given as raw JSON messages.
    pub fn push_raw_frame(&mut self, raw_messages: &[&str]) -> Result<&mut Self, ClientError> {
        let frame = raw_messages
            .iter()
            .map(|raw| parse_message(raw))
            .collect::<Result<Vec<_>, _>>()?;
        self.frames.push(frame);
        Ok(self)
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    fn load_next_frame(&mut self) {
        let frame = self.frames[self.cursor].clone();
        self.cursor = (self.cursor + 1) % self.frames.len();
        self.pending.extend(frame);
    }
}

#[async_trait]
impl DataSource for FixtureSource {
    async fn next_message(&mut self) -> Result<FeedMessage, ClientError> {
        if self.frames.is_empty() {
            return Err(ClientError::Configuration(
                "fixture source has no frames".to_string(),
            ));
        }

        if self.pending.is_empty() {
            // No pause before the very first frame, matching a feed that
            // broadcasts immediately on connect.
            if self.started {
                sleep(self.interval).await;
            }
            self.started = true;
            self.load_next_frame();
        }

        // Frames are non-empty batches or skipped entirely.
        loop {
            if let Some(message) = self.pending.pop_front() {
                return Ok(message);
            }
            sleep(self.interval).await;
            self.load_next_frame();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{NewsContent, OhlcContent};

    fn news() -> FeedMessage {
        FeedMessage::News(NewsContent { news: Vec::new() })
    }

    fn ohlc() -> FeedMessage {
        FeedMessage::Ohlc(OhlcContent { data: Vec::new() })
    }

    #[tokio::test]
    async fn test_empty_source_is_a_configuration_error() {
        let mut source = FixtureSource::new(Duration::from_millis(1));
        let err = source.next_message().await.unwrap_err();
        assert!(matches!(err, ClientError::Configuration(_)));
    }

    #[tokio::test]
    async fn test_frames_replay_in_order_and_wrap() {
        let mut source = FixtureSource::new(Duration::from_millis(1));
        source.push_frame(vec![news(), ohlc()]);
        source.push_frame(vec![ohlc()]);

        assert_eq!(source.next_message().await.unwrap(), news());
        assert_eq!(source.next_message().await.unwrap(), ohlc());
        assert_eq!(source.next_message().await.unwrap(), ohlc());
        // Wraps back to the first frame.
        assert_eq!(source.next_message().await.unwrap(), news());
    }

    #[tokio::test]
    async fn test_raw_frame_parsing() {
        let mut source = FixtureSource::new(Duration::from_millis(1));
        source
            .push_raw_frame(&[r#"{"type": "news", "content": {"news": []}}"#])
            .unwrap();

        assert_eq!(source.frame_count(), 1);
        assert_eq!(source.next_message().await.unwrap(), news());
    }

    #[tokio::test]
    async fn test_raw_frame_rejects_bad_messages() {
        let mut source = FixtureSource::new(Duration::from_millis(1));
        let err = source
            .push_raw_frame(&[r#"{"type": "bogus", "content": {}}"#])
            .unwrap_err();
        assert!(matches!(err, ClientError::Parse(_)));
        assert_eq!(source.frame_count(), 0);
    }

    #[test]
    fn test_fixture_source_reports_connected() {
        let source = FixtureSource::new(Duration::from_secs(2));
        assert_eq!(source.connection_state(), ConnectionState::Connected);
    }
}
