//! Client-side exchange filtering for order-book rows.

use crate::data::{Order, Side};
use std::fmt;

/// Exchange selection for one book side.
///
/// `All` is the dropdown sentinel meaning no filtering; `Only` keeps rows
/// whose exchange matches exactly (case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExchangeFilter {
    All,
    Only(String),
}

impl ExchangeFilter {
    /// Build a filter from the raw dropdown selection string.
    pub fn from_selection(selection: &str) -> Self {
        if selection == "All" {
            ExchangeFilter::All
        } else {
            ExchangeFilter::Only(selection.to_string())
        }
    }

    pub fn matches(&self, order: &Order) -> bool {
        match self {
            ExchangeFilter::All => true,
            ExchangeFilter::Only(exchange) => order.exchange == *exchange,
        }
    }

    /// Stable subsequence filter: keeps matching orders in their original
    /// relative order. Identity under `All`.
    pub fn apply(&self, orders: &[Order]) -> Vec<Order> {
        orders
            .iter()
            .filter(|o| self.matches(o))
            .cloned()
            .collect()
    }
}

impl Default for ExchangeFilter {
    fn default() -> Self {
        ExchangeFilter::All
    }
}

impl fmt::Display for ExchangeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExchangeFilter::All => write!(f, "All"),
            ExchangeFilter::Only(exchange) => write!(f, "{}", exchange),
        }
    }
}

/// The per-side filter selection snapshot supplied by the view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub bid: ExchangeFilter,
    pub ask: ExchangeFilter,
}

impl FilterSelection {
    pub fn for_side(&self, side: Side) -> &ExchangeFilter {
        match side {
            Side::Bid => &self.bid,
            Side::Ask => &self.ask,
        }
    }

    pub fn set(&mut self, side: Side, filter: ExchangeFilter) {
        match side {
            Side::Bid => self.bid = filter,
            Side::Ask => self.ask = filter,
        }
    }
}
