//! Per-update pipeline output: everything the view renders from one
//! order book message under one filter selection and display mode.

use crate::{
    banding::{classify_proximity, Band},
    data::{Order, Side, SpreadSummary},
    depth::{compute_profile, group_top_levels, midpoint, DepthConfig, DepthProfile},
    filter::FilterSelection,
    header::{render_header, DisplayMode, HeaderView},
    message::OrderbookContent,
};
use rust_decimal::Decimal;

/// An order row with its proximity band.
#[derive(Debug, Clone, PartialEq)]
pub struct BandedOrder {
    pub order: Order,
    pub band: Band,
}

/// Derived view data for one order book update.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthSnapshot {
    /// Filtered bid rows, feed order preserved.
    pub bids: Vec<BandedOrder>,
    /// Filtered ask rows, feed order preserved.
    pub asks: Vec<BandedOrder>,
    /// Midpoint the bands were computed against.
    pub midpoint: Decimal,
    /// 10-segment volume profile over the filtered orders.
    pub profile: DepthProfile,
    pub header: Option<HeaderView>,
    pub spread_summary: Option<SpreadSummary>,
}

/// Build the full snapshot for one inbound order book message.
///
/// The midpoint comes from the unfiltered book (the spread does not move
/// when the user narrows the view to one exchange); rows and the volume
/// profile are computed from the filtered orders. Pure and recomputable:
/// equal inputs produce deep-equal snapshots.
pub fn build_depth_snapshot(
    content: &OrderbookContent,
    selection: &FilterSelection,
    mode: DisplayMode,
    config: &DepthConfig,
) -> DepthSnapshot {
    let mid = midpoint(&content.bids, &content.asks, config.fallback_midpoint);

    let filtered_bids = selection.bid.apply(&content.bids);
    let filtered_asks = selection.ask.apply(&content.asks);

    let band_rows = |orders: Vec<Order>| -> Vec<BandedOrder> {
        orders
            .into_iter()
            .map(|order| BandedOrder {
                band: classify_proximity(order.price, mid),
                order,
            })
            .collect()
    };

    let bid_levels = group_top_levels(&filtered_bids, Side::Bid, config.depth);
    let ask_levels = group_top_levels(&filtered_asks, Side::Ask, config.depth);
    let profile = compute_profile(&bid_levels, &ask_levels);

    tracing::debug!(
        bids = filtered_bids.len(),
        asks = filtered_asks.len(),
        %mid,
        total_shares = profile.total_shares,
        "built depth snapshot"
    );

    DepthSnapshot {
        bids: band_rows(filtered_bids),
        asks: band_rows(filtered_asks),
        midpoint: mid,
        profile,
        header: content
            .header_info
            .as_ref()
            .map(|info| render_header(info, mode)),
        spread_summary: content.spread_summary.clone(),
    }
}
