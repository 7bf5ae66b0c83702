//! # Depthview SDK
//!
//! Client core for a market-data dashboard: consumes inbound feed
//! messages (order book, trade tape, OHLC, intraday time series, news)
//! from a polling fixture source or a live WebSocket feed, and derives
//! the data the view renders — banded order rows, the 10-segment volume
//! profile, header deltas and chart coordinates.
//!
//! ## Quick Start
//! ```rust,ignore
//! use depthview_sdk::prelude::*;
//! use std::sync::Arc;
//!
//! struct Printer;
//! impl DashboardHandler for Printer {
//!     fn on_depth(&self, snapshot: DepthSnapshot) {
//!         println!("{} bids @ mid {}", snapshot.bids.len(), snapshot.midpoint);
//!     }
//! }
//!
//! let source = WebSocketSource::new(ClientConfig::default())?;
//! let mut client = DashboardClient::new(source, Arc::new(Printer));
//! client.run().await?;
//! ```

pub mod banding;
pub mod client;
pub mod connection;
pub mod data;
pub mod depth;
pub mod error;
pub mod events;
pub mod filter;
pub mod header;
pub mod message;
pub mod parser;
pub mod retry;
pub mod snapshot;
pub mod source;
pub mod timeseries;

pub use banding::{classify_proximity, segment_color, Band, BAND_COUNT};
pub use client::{DashboardClient, DashboardClientBuilder};
pub use connection::WebSocketSource;
pub use data::*;
pub use depth::{compute_profile, group_top_levels, midpoint, DepthConfig, DepthProfile, ProfileLevel};
pub use error::*;
pub use events::DashboardHandler;
pub use filter::{ExchangeFilter, FilterSelection};
pub use header::{render_header, DeltaDirection, DisplayMode, HeaderView, PriceDelta};
pub use message::*;
pub use parser::parse_message;
pub use retry::RetryPolicy;
pub use snapshot::{build_depth_snapshot, BandedOrder, DepthSnapshot};
pub use source::{DataSource, FixtureSource};
pub use timeseries::{project, session_x_position, ChartPoint};

/// Prelude - minimal public API surface
///
/// Import with: `use depthview_sdk::prelude::*;`
pub mod prelude {
    /// Client pipeline
    pub use crate::client::{DashboardClient, DashboardClientBuilder};

    /// Data sources
    pub use crate::connection::WebSocketSource;
    pub use crate::source::{DataSource, FixtureSource};

    /// Handler trait and the snapshot it receives
    pub use crate::events::DashboardHandler;
    pub use crate::snapshot::{BandedOrder, DepthSnapshot};

    /// Configuration
    pub use crate::data::{ClientConfig, ConnectionState};
    pub use crate::depth::DepthConfig;

    /// View-state inputs
    pub use crate::filter::{ExchangeFilter, FilterSelection};
    pub use crate::header::DisplayMode;

    /// Core data types
    pub use crate::data::{Order, PriceLevel, Side};
    pub use crate::message::FeedMessage;

    /// Errors
    pub use crate::error::ClientError;
}

/// Initialize logging for the SDK
pub fn init_logging() {
    tracing_subscriber::fmt::init();
}
