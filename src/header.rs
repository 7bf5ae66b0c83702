//! Header view rendering.
//!
//! The buy/sell display mode is an explicit value threaded into
//! [`render_header`] rather than ambient shared state; the view owns the
//! current mode and passes it in on every render.

use crate::data::{HeaderInfo, SideStats};
use rust_decimal::Decimal;

/// Which side's statistics the header shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Buy,
    Sell,
}

impl DisplayMode {
    pub fn toggle(self) -> Self {
        match self {
            DisplayMode::Buy => DisplayMode::Sell,
            DisplayMode::Sell => DisplayMode::Buy,
        }
    }

    /// Lowercase label used in the "Cur (top buy)" header text.
    pub fn label(&self) -> &'static str {
        match self {
            DisplayMode::Buy => "buy",
            DisplayMode::Sell => "sell",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaDirection {
    Up,
    Down,
}

/// Price movement shown next to the top price. Magnitudes are absolute;
/// the direction carries the sign.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceDelta {
    pub direction: DeltaDirection,
    pub change: Decimal,
    pub change_percent: Decimal,
}

/// Everything the view needs to draw the order-book header.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderView {
    pub mode: DisplayMode,
    pub top_price: Option<Decimal>,
    /// Absent when the feed supplied no change data; the view hides the
    /// arrow and delta text in that case.
    pub delta: Option<PriceDelta>,
    pub total_volume: Option<u64>,
}

/// Render the header for the given display mode.
///
/// Pure function of its two inputs; recomputed on every inbound update
/// and on every mode toggle.
pub fn render_header(info: &HeaderInfo, mode: DisplayMode) -> HeaderView {
    let stats: &SideStats = match mode {
        DisplayMode::Buy => &info.buy,
        DisplayMode::Sell => &info.sell,
    };

    let delta = match (stats.price_change, stats.price_change_percent) {
        (Some(change), Some(percent)) => {
            let direction = if change >= Decimal::ZERO {
                DeltaDirection::Up
            } else {
                DeltaDirection::Down
            };
            Some(PriceDelta {
                direction,
                change: change.abs(),
                change_percent: percent.abs(),
            })
        }
        _ => None,
    };

    HeaderView {
        mode,
        top_price: stats.top_price,
        delta,
        total_volume: stats.total_volume,
    }
}
