//! Inbound feed message shapes.
//!
//! Every data source, polling or push, resolves to the same
//! `{type, content}` envelope; one pipeline consumes the result.

use crate::data::{HeaderInfo, NewsItem, OhlcField, Order, SpreadSummary, TimeseriesPoint, Trade};
use serde::{Deserialize, Serialize};

/// A parsed inbound feed message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "content", rename_all = "lowercase")]
pub enum FeedMessage {
    Orderbook(OrderbookContent),
    Trades(TradesContent),
    Ohlc(OhlcContent),
    Timeseries(TimeseriesContent),
    News(NewsContent),
}

impl FeedMessage {
    /// Wire name of the message type, as carried in the `type` field.
    pub fn type_name(&self) -> &'static str {
        match self {
            FeedMessage::Orderbook(_) => "orderbook",
            FeedMessage::Trades(_) => "trades",
            FeedMessage::Ohlc(_) => "ohlc",
            FeedMessage::Timeseries(_) => "timeseries",
            FeedMessage::News(_) => "news",
        }
    }
}

/// Order book payload: the full current order set per side, plus the
/// optional header and spread-summary extras.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderbookContent {
    #[serde(default)]
    pub bids: Vec<Order>,
    #[serde(default)]
    pub asks: Vec<Order>,
    #[serde(rename = "headerInfo", default, skip_serializing_if = "Option::is_none")]
    pub header_info: Option<HeaderInfo>,
    #[serde(rename = "yellowBar", default, skip_serializing_if = "Option::is_none")]
    pub spread_summary: Option<SpreadSummary>,
}

/// Trade tape payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TradesContent {
    pub trades: Vec<Trade>,
}

/// OHLC quotes panel payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OhlcContent {
    pub data: Vec<OhlcField>,
}

/// Intraday time series payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeseriesContent {
    pub symbol: String,
    pub prices: Vec<TimeseriesPoint>,
}

/// News feed payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewsContent {
    pub news: Vec<NewsItem>,
}
