//! Handler trait for dispatching derived view data.

use crate::{
    data::ConnectionState,
    error::ClientError,
    message::{NewsContent, OhlcContent, TimeseriesContent, TradesContent},
    snapshot::DepthSnapshot,
};

/// Receives everything the dashboard renders.
///
/// All methods default to no-ops so a handler only implements the panels
/// it draws. Depth snapshots arrive on every order book update and again
/// whenever the filter selection or display mode changes.
pub trait DashboardHandler: Send + Sync {
    fn on_depth(&self, _snapshot: DepthSnapshot) {}

    fn on_trades(&self, _trades: TradesContent) {}

    fn on_ohlc(&self, _ohlc: OhlcContent) {}

    fn on_timeseries(&self, _series: TimeseriesContent) {}

    fn on_news(&self, _news: NewsContent) {}

    fn on_error(&self, _error: ClientError) {}

    fn on_connection_state_change(&self, _state: ConnectionState) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_default_methods_are_noops() {
        struct Silent;
        impl DashboardHandler for Silent {}

        let handler = Silent;
        handler.on_news(NewsContent { news: Vec::new() });
        handler.on_error(ClientError::Configuration("ignored".to_string()));
        handler.on_connection_state_change(ConnectionState::Connected);
    }

    #[test]
    fn test_partial_handler_overrides() {
        struct Counter(AtomicUsize);
        impl DashboardHandler for Counter {
            fn on_news(&self, _news: NewsContent) {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }

        let handler = Counter(AtomicUsize::new(0));
        handler.on_news(NewsContent { news: Vec::new() });
        handler.on_news(NewsContent { news: Vec::new() });
        assert_eq!(handler.0.load(Ordering::SeqCst), 2);
    }
}
