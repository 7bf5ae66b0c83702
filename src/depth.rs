//! Price-level aggregation: top-of-book depth levels and the 10-segment
//! volume profile.
//!
//! Everything here is a pure function of its inputs. Each call receives a
//! complete snapshot of the current order set and returns freshly
//! allocated derived structures; there is no retained state between calls.

use crate::data::{Order, PriceLevel, Side};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::BTreeMap;

/// Aggregation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthConfig {
    /// Number of price levels kept per side.
    pub depth: usize,
    /// Midpoint used when one or both book sides are empty.
    pub fallback_midpoint: Decimal,
}

impl Default for DepthConfig {
    fn default() -> Self {
        Self {
            depth: 5,
            fallback_midpoint: dec!(632.30),
        }
    }
}

/// A price level annotated with its share of the combined profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileLevel {
    pub price: Decimal,
    pub share_count: u64,
    pub volume: Decimal,
    /// Share of the combined 10-segment total, 0-100.
    pub percentage: f64,
}

/// The normalized 10-segment (5 bid + 5 ask) volume profile.
///
/// `bid_levels` is in presentation order: index 0 is the level furthest
/// from the spread, index 4 the closest. `ask_levels` stays closest-first.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthProfile {
    pub bid_levels: Vec<ProfileLevel>,
    pub ask_levels: Vec<ProfileLevel>,
    pub total_bid_shares: u64,
    pub total_ask_shares: u64,
    pub total_shares: u64,
    pub total_volume: Decimal,
}

/// Group orders by exact price into at most `count` levels for one side.
///
/// Levels are sorted descending by price for bids and ascending for asks,
/// then padded with zero placeholders so the output length is always
/// exactly `count`. Empty input yields all placeholders.
pub fn group_top_levels(orders: &[Order], side: Side, count: usize) -> Vec<PriceLevel> {
    let mut grouped: BTreeMap<Decimal, PriceLevel> = BTreeMap::new();

    for order in orders {
        let volume = order.price * Decimal::from(order.size);
        grouped
            .entry(order.price)
            .and_modify(|level| {
                level.share_count += order.size;
                level.volume += volume;
            })
            .or_insert_with(|| PriceLevel {
                price: order.price,
                share_count: order.size,
                volume,
            });
    }

    let mut levels: Vec<PriceLevel> = match side {
        Side::Bid => grouped.into_values().rev().take(count).collect(),
        Side::Ask => grouped.into_values().take(count).collect(),
    };

    while levels.len() < count {
        levels.push(PriceLevel::placeholder());
    }

    levels
}

/// Combine the two fixed-length level sequences into the volume profile.
///
/// Percentages are computed against the total share count across all 10
/// segments, so they sum to 100 whenever that total is non-zero and to 0
/// for an empty book. The bid sequence is reversed for presentation.
pub fn compute_profile(bid_levels: &[PriceLevel], ask_levels: &[PriceLevel]) -> DepthProfile {
    let total_bid_shares: u64 = bid_levels.iter().map(|l| l.share_count).sum();
    let total_ask_shares: u64 = ask_levels.iter().map(|l| l.share_count).sum();
    let total_shares = total_bid_shares + total_ask_shares;

    let percentage_of = |share_count: u64| -> f64 {
        if total_shares > 0 {
            share_count as f64 / total_shares as f64 * 100.0
        } else {
            0.0
        }
    };

    let annotate = |level: &PriceLevel| ProfileLevel {
        price: level.price,
        share_count: level.share_count,
        volume: level.volume,
        percentage: percentage_of(level.share_count),
    };

    let mut bid_levels: Vec<ProfileLevel> = bid_levels.iter().map(annotate).collect();
    let ask_levels: Vec<ProfileLevel> = ask_levels.iter().map(annotate).collect();

    // Presentation order: furthest-from-spread first on the bid side.
    bid_levels.reverse();

    let total_volume = bid_levels
        .iter()
        .chain(ask_levels.iter())
        .map(|l| l.volume)
        .sum();

    DepthProfile {
        bid_levels,
        ask_levels,
        total_bid_shares,
        total_ask_shares,
        total_shares,
        total_volume,
    }
}

/// Spread midpoint: `(best_bid + best_ask) / 2` when both sides are
/// non-empty, otherwise the configured fallback.
pub fn midpoint(bids: &[Order], asks: &[Order], fallback: Decimal) -> Decimal {
    let best_bid = bids.iter().map(|o| o.price).max();
    let best_ask = asks.iter().map(|o| o.price).min();

    match (best_bid, best_ask) {
        (Some(bid), Some(ask)) => (bid + ask) / dec!(2),
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(price: Decimal, size: u64) -> Order {
        Order {
            price,
            size,
            exchange: "XLON".to_string(),
            time: "09:15:00".to_string(),
        }
    }

    #[test]
    fn test_group_top_levels_aggregates_and_pads() {
        let bids = vec![
            order(dec!(100), 10),
            order(dec!(100), 5),
            order(dec!(99), 20),
        ];

        let levels = group_top_levels(&bids, Side::Bid, 5);

        assert_eq!(levels.len(), 5);
        assert_eq!(levels[0].price, dec!(100));
        assert_eq!(levels[0].share_count, 15);
        assert_eq!(levels[0].volume, dec!(1500));
        assert_eq!(levels[1].price, dec!(99));
        assert_eq!(levels[1].share_count, 20);
        assert_eq!(levels[1].volume, dec!(1980));
        assert!(levels[2..].iter().all(|l| l.is_placeholder()));
    }

    #[test]
    fn test_group_top_levels_empty_input() {
        let levels = group_top_levels(&[], Side::Ask, 5);
        assert_eq!(levels.len(), 5);
        assert!(levels.iter().all(|l| l.is_placeholder()));
    }

    #[test]
    fn test_group_top_levels_sort_order() {
        let orders: Vec<Order> = [632.25, 632.31, 632.10, 632.31, 632.40]
            .iter()
            .map(|p| order(Decimal::try_from(*p).unwrap(), 100))
            .collect();

        let bids = group_top_levels(&orders, Side::Bid, 5);
        for pair in bids.windows(2) {
            if !pair[1].is_placeholder() {
                assert!(pair[0].price >= pair[1].price);
            }
        }
        assert_eq!(bids[0].price, dec!(632.40));

        let asks = group_top_levels(&orders, Side::Ask, 5);
        for pair in asks.windows(2) {
            if !pair[1].is_placeholder() {
                assert!(pair[0].price <= pair[1].price);
            }
        }
        assert_eq!(asks[0].price, dec!(632.10));
    }

    #[test]
    fn test_group_top_levels_truncates_to_count() {
        let orders: Vec<Order> = (1..=8)
            .map(|i| order(Decimal::from(600 + i), 10))
            .collect();

        let levels = group_top_levels(&orders, Side::Bid, 5);
        assert_eq!(levels.len(), 5);
        // Highest five prices survive on the bid side.
        assert_eq!(levels[0].price, dec!(608));
        assert_eq!(levels[4].price, dec!(604));
    }

    #[test]
    fn test_profile_percentages_sum_to_100() {
        let bids = vec![order(dec!(100), 30), order(dec!(99), 10)];
        let asks = vec![order(dec!(101), 40), order(dec!(102), 20)];

        let bid_levels = group_top_levels(&bids, Side::Bid, 5);
        let ask_levels = group_top_levels(&asks, Side::Ask, 5);
        let profile = compute_profile(&bid_levels, &ask_levels);

        assert_eq!(profile.total_shares, 100);
        let sum: f64 = profile
            .bid_levels
            .iter()
            .chain(profile.ask_levels.iter())
            .map(|l| l.percentage)
            .sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_profile_empty_book_is_all_zero() {
        let bid_levels = group_top_levels(&[], Side::Bid, 5);
        let ask_levels = group_top_levels(&[], Side::Ask, 5);
        let profile = compute_profile(&bid_levels, &ask_levels);

        assert_eq!(profile.total_shares, 0);
        let sum: f64 = profile
            .bid_levels
            .iter()
            .chain(profile.ask_levels.iter())
            .map(|l| l.percentage)
            .sum();
        assert_eq!(sum, 0.0);
    }

    #[test]
    fn test_profile_bid_presentation_order() {
        let bids = vec![order(dec!(100), 10), order(dec!(99), 20)];
        let bid_levels = group_top_levels(&bids, Side::Bid, 5);
        let profile = compute_profile(&bid_levels, &group_top_levels(&[], Side::Ask, 5));

        // Reversed: placeholders first, then 99, then 100 closest to spread.
        assert_eq!(profile.bid_levels[3].price, dec!(99));
        assert_eq!(profile.bid_levels[4].price, dec!(100));
    }

    #[test]
    fn test_midpoint_and_fallback() {
        let bids = vec![order(dec!(632.28), 10)];
        let asks = vec![order(dec!(632.36), 10)];

        assert_eq!(midpoint(&bids, &asks, dec!(632.30)), dec!(632.32));
        assert_eq!(midpoint(&bids, &[], dec!(632.30)), dec!(632.30));
        assert_eq!(midpoint(&[], &asks, dec!(632.30)), dec!(632.30));
        assert_eq!(midpoint(&[], &[], dec!(632.30)), dec!(632.30));
    }

    #[test]
    fn test_midpoint_uses_best_prices() {
        let bids = vec![order(dec!(632.10), 5), order(dec!(632.28), 5)];
        let asks = vec![order(dec!(632.50), 5), order(dec!(632.36), 5)];

        // Best bid 632.28, best ask 632.36.
        assert_eq!(midpoint(&bids, &asks, dec!(0)), dec!(632.32));
    }
}
