//! Intraday chart support: maps session clock times onto the chart's
//! synthetic x axis.
//!
//! The axis compresses the 09:00-16:30 session into [0.5, 4.5] with a
//! labelled tick every two hours: 09:00 -> 0.5, 11:00 -> 1.5,
//! 13:00 -> 2.5, 15:00 -> 3.5, and the 15:00 bucket runs to the 16:30
//! close at 4.5. Times before the open are not plotted.

use crate::data::TimeseriesPoint;
use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;

/// A plottable chart point.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub price: Decimal,
}

/// Two-hour session buckets; (start minutes, end minutes, x at start).
const BUCKETS: [(u32, u32, f64); 4] = [
    (9 * 60, 11 * 60, 0.5),
    (11 * 60, 13 * 60, 1.5),
    (13 * 60, 15 * 60, 2.5),
    (15 * 60, 16 * 60 + 30, 3.5),
];

/// Map a "HH:MM" session time to its x position.
///
/// Returns `None` for times before 09:00 or strings that do not parse;
/// times at or after 15:00 scale linearly toward the 16:30 close.
pub fn session_x_position(time: &str) -> Option<f64> {
    let parsed = NaiveTime::parse_from_str(time, "%H:%M").ok()?;
    let minutes = parsed.hour() * 60 + parsed.minute();

    let (start, end, x_base) = BUCKETS
        .iter()
        .copied()
        .find(|&(start, end, _)| {
            // Last bucket is open-ended past 15:00, like the session close
            // handling in the feed.
            minutes >= start && (minutes < end || end == 16 * 60 + 30)
        })?;

    Some(x_base + (minutes - start) as f64 / (end - start) as f64)
}

/// Project a raw time series into plottable points.
///
/// Null prices and unmappable times are dropped; the relative order of
/// the remaining points is preserved.
pub fn project(points: &[TimeseriesPoint]) -> Vec<ChartPoint> {
    points
        .iter()
        .filter_map(|point| {
            let price = point.price?;
            let x = session_x_position(&point.time)?;
            Some(ChartPoint { x, price })
        })
        .collect()
}
