//! Proximity banding: maps an order's distance from the spread midpoint
//! onto a fixed 20-entry color palette.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Number of proximity bands.
pub const BAND_COUNT: u8 = 20;

/// Width of one band in price distance.
const BAND_WIDTH: Decimal = dec!(0.05);

/// Palette ordered nearest-to-spread first. The names mirror the
/// stylesheet classes the view layer attaches to order rows.
const PALETTE: [&str; BAND_COUNT as usize] = [
    "order-darkest-blue",
    "order-dark-blue",
    "order-blue",
    "order-light-blue",
    "order-lightest-blue",
    "order-cyan",
    "order-light-cyan",
    "order-lightest-pink",
    "order-light-pink",
    "order-pink",
    "order-dark-pink",
    "order-darker-pink",
    "order-red-pink",
    "order-light-brown",
    "order-brown",
    "order-dark-brown",
    "order-darker-brown",
    "order-darkest-brown",
    "order-maroon",
    "order-deep-maroon",
];

/// A proximity band, indexed 1 (nearest to spread) through 20 (furthest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Band(u8);

impl Band {
    /// 1-based band index.
    pub fn index(&self) -> u8 {
        self.0
    }

    /// Stylesheet class the view attaches to rows in this band.
    pub fn css_class(&self) -> &'static str {
        PALETTE[(self.0 - 1) as usize]
    }

    pub fn nearest() -> Self {
        Band(1)
    }

    pub fn furthest() -> Self {
        Band(BAND_COUNT)
    }
}

/// Classify a price by its distance from the midpoint.
///
/// Distance is rounded to 2 decimals, then mapped into contiguous
/// 0.05-wide bands with inclusive upper edges: band k covers
/// `((k-1)*0.05, k*0.05]`, band 20 is the catch-all above 0.95.
/// Total over all non-negative distances and monotonic in distance.
pub fn classify_proximity(price: Decimal, midpoint: Decimal) -> Band {
    let distance = (price - midpoint)
        .abs()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    let index = (distance / BAND_WIDTH)
        .ceil()
        .to_u8()
        .unwrap_or(BAND_COUNT)
        .clamp(1, BAND_COUNT);

    Band(index)
}

/// Color class for one of the five profile-bar segments per side.
/// Segment 1 sits closest to the spread.
pub fn segment_color(segment: u8) -> &'static str {
    match segment {
        1 => "order-dark-blue",
        2 => "order-blue",
        3 => "order-light-blue",
        4 => "order-lightest-blue",
        _ => "order-cyan",
    }
}
