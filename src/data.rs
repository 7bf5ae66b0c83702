//! Data models for dashboard market data

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Book side tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Bid,
    Ask,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Bid => write!(f, "bid"),
            Side::Ask => write!(f, "ask"),
        }
    }
}

/// A single resting order-book entry as delivered by the feed.
///
/// Orders have no identity beyond their fields; duplicates at the same
/// price are valid and get aggregated, not deduplicated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub price: Decimal,
    pub size: u64,
    pub exchange: String,
    pub time: String,
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} [{}] @ {}", self.size, self.price, self.exchange, self.time)
    }
}

/// Aggregation bucket keyed by exact price within one side.
///
/// Rebuilt from scratch on every aggregation call; never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceLevel {
    pub price: Decimal,
    pub share_count: u64,
    pub volume: Decimal,
}

impl PriceLevel {
    /// Zero-valued placeholder used to pad short sides to a fixed depth.
    pub fn placeholder() -> Self {
        Self {
            price: Decimal::ZERO,
            share_count: 0,
            volume: Decimal::ZERO,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.share_count == 0 && self.price.is_zero()
    }
}

impl fmt::Display for PriceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{} (vol {})", self.share_count, self.price, self.volume)
    }
}

/// Price tone used by the trade tape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeTone {
    Blue,
    Red,
}

/// A trade-tape row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trade {
    pub price: Decimal,
    pub shares: u64,
    #[serde(rename = "type")]
    pub kind: String,
    pub time: String,
    pub color: TradeTone,
}

/// One label/value pair in the OHLC quotes panel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OhlcField {
    pub label: String,
    pub value: String,
}

/// A single intraday price observation; `price` is null outside trading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeseriesPoint {
    pub time: String,
    pub price: Option<Decimal>,
}

/// A news-feed row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewsItem {
    pub date: String,
    pub time: String,
    pub headline: String,
    pub source: String,
}

/// Per-side header statistics supplied by the feed.
///
/// All fields are optional: the feed omits deltas when there is no
/// reference price to diff against.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SideStats {
    pub top_price: Option<Decimal>,
    pub price_change: Option<Decimal>,
    pub price_change_percent: Option<Decimal>,
    pub total_volume: Option<u64>,
}

/// Header statistics for both display modes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeaderInfo {
    #[serde(rename = "buyData")]
    pub buy: SideStats,
    #[serde(rename = "sellData")]
    pub sell: SideStats,
}

/// The spread summary strip: counts and best prices on each side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpreadSummary {
    pub bid_order_count: u64,
    pub bid_share_count: u64,
    pub bid_price: Decimal,
    pub ask_price: Decimal,
    pub ask_share_count: u64,
    pub ask_order_count: u64,
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: String,
    pub reconnect_delay: std::time::Duration,
    pub connect_timeout: std::time::Duration,
}

impl ClientConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), String> {
        if self.endpoint.is_empty() {
            return Err("Endpoint cannot be empty".to_string());
        }

        if !self.endpoint.starts_with("ws://") && !self.endpoint.starts_with("wss://") {
            return Err("Endpoint must be a valid WebSocket URL".to_string());
        }

        if self.reconnect_delay.as_millis() == 0 {
            return Err("Reconnect delay must be greater than 0".to_string());
        }

        if self.connect_timeout.as_secs() == 0 {
            return Err("Connect timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "ws://localhost:8080/websocket".to_string(),
            reconnect_delay: std::time::Duration::from_secs(3),
            connect_timeout: std::time::Duration::from_secs(30),
        }
    }
}

/// Connection state enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
    Reconnecting,
}
