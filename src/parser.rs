//! Feed message parsing.
//!
//! Inspects the `{type, content}` envelope by hand so that a missing
//! field, an unknown message type and malformed content each surface as
//! their own error, then hands the content to serde.

use crate::{
    error::ParseError,
    message::{
        FeedMessage, NewsContent, OhlcContent, OrderbookContent, TimeseriesContent, TradesContent,
    },
};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Parse one raw feed frame into a typed message.
pub fn parse_message(raw: &str) -> Result<FeedMessage, ParseError> {
    let envelope: Value =
        serde_json::from_str(raw).map_err(|e| ParseError::InvalidJson(e.to_string()))?;

    let message_type = envelope
        .get("type")
        .and_then(|v| v.as_str())
        .ok_or_else(|| ParseError::MissingField("type".to_string()))?;

    let content = envelope
        .get("content")
        .ok_or_else(|| ParseError::MissingField("content".to_string()))?;

    let message = match message_type {
        "orderbook" => FeedMessage::Orderbook(parse_content::<OrderbookContent>(content)?),
        "trades" => FeedMessage::Trades(parse_content::<TradesContent>(content)?),
        "ohlc" => FeedMessage::Ohlc(parse_content::<OhlcContent>(content)?),
        "timeseries" => FeedMessage::Timeseries(parse_content::<TimeseriesContent>(content)?),
        "news" => FeedMessage::News(parse_content::<NewsContent>(content)?),
        other => {
            tracing::debug!("Ignoring unknown message type: {}", other);
            return Err(ParseError::UnknownMessageType(other.to_string()));
        }
    };

    Ok(message)
}

fn parse_content<T: DeserializeOwned>(content: &Value) -> Result<T, ParseError> {
    serde_json::from_value(content.clone())
        .map_err(|e| ParseError::MalformedContent(e.to_string()))
}
