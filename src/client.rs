//! Dashboard client: pulls messages from a data source, derives view
//! data, and dispatches it to a handler.

use crate::{
    data::{ConnectionState, Side},
    depth::DepthConfig,
    error::ClientError,
    events::DashboardHandler,
    filter::{ExchangeFilter, FilterSelection},
    header::DisplayMode,
    message::{FeedMessage, OrderbookContent},
    snapshot::build_depth_snapshot,
    source::DataSource,
};
use std::sync::Arc;

/// Builder for [`DashboardClient`].
pub struct DashboardClientBuilder<S> {
    source: S,
    handler: Arc<dyn DashboardHandler>,
    depth_config: DepthConfig,
    selection: FilterSelection,
    mode: DisplayMode,
}

impl<S: DataSource> DashboardClientBuilder<S> {
    pub fn new(source: S, handler: Arc<dyn DashboardHandler>) -> Self {
        Self {
            source,
            handler,
            depth_config: DepthConfig::default(),
            selection: FilterSelection::default(),
            mode: DisplayMode::default(),
        }
    }

    pub fn depth_config(mut self, config: DepthConfig) -> Self {
        self.depth_config = config;
        self
    }

    pub fn selection(mut self, selection: FilterSelection) -> Self {
        self.selection = selection;
        self
    }

    pub fn display_mode(mut self, mode: DisplayMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn build(self) -> DashboardClient<S> {
        DashboardClient {
            source: self.source,
            handler: self.handler,
            depth_config: self.depth_config,
            selection: self.selection,
            mode: self.mode,
            last_book: None,
            last_state: ConnectionState::Disconnected,
        }
    }
}

/// The client pipeline.
///
/// Owns the data source, the current filter selection and the display
/// mode. Every inbound order book message is kept as the current book
/// snapshot so that selection and mode changes can recompute the derived
/// view immediately, without waiting for the next update.
pub struct DashboardClient<S> {
    source: S,
    handler: Arc<dyn DashboardHandler>,
    depth_config: DepthConfig,
    selection: FilterSelection,
    mode: DisplayMode,
    last_book: Option<OrderbookContent>,
    last_state: ConnectionState,
}

impl<S: DataSource> DashboardClient<S> {
    pub fn builder(source: S, handler: Arc<dyn DashboardHandler>) -> DashboardClientBuilder<S> {
        DashboardClientBuilder::new(source, handler)
    }

    pub fn new(source: S, handler: Arc<dyn DashboardHandler>) -> Self {
        Self::builder(source, handler).build()
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// Change one side's exchange filter and re-derive the depth view
    /// from the current book.
    pub fn set_filter(&mut self, side: Side, filter: ExchangeFilter) {
        self.selection.set(side, filter);
        self.redispatch_depth();
    }

    /// Switch the header between buy and sell statistics.
    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.mode = mode;
        self.redispatch_depth();
    }

    pub fn toggle_display_mode(&mut self) {
        self.set_display_mode(self.mode.toggle());
    }

    /// Process inbound messages until the source fails with a
    /// configuration error. Parse errors are reported to the handler and
    /// the loop continues; the transport handles reconnection itself.
    pub async fn run(&mut self) -> Result<(), ClientError> {
        loop {
            self.pump_one().await?;
        }
    }

    /// Process a single inbound message.
    pub async fn pump_one(&mut self) -> Result<(), ClientError> {
        self.observe_connection_state();

        match self.source.next_message().await {
            Ok(message) => {
                self.observe_connection_state();
                self.dispatch(message);
                Ok(())
            }
            Err(e @ ClientError::Configuration(_)) => Err(e),
            Err(e) => {
                tracing::warn!(error = %e, "feed message dropped");
                self.handler.on_error(e);
                Ok(())
            }
        }
    }

    fn dispatch(&mut self, message: FeedMessage) {
        match message {
            FeedMessage::Orderbook(content) => {
                self.last_book = Some(content);
                self.redispatch_depth();
            }
            FeedMessage::Trades(content) => self.handler.on_trades(content),
            FeedMessage::Ohlc(content) => self.handler.on_ohlc(content),
            FeedMessage::Timeseries(content) => self.handler.on_timeseries(content),
            FeedMessage::News(content) => self.handler.on_news(content),
        }
    }

    /// Recompute and dispatch the depth snapshot from the current book.
    fn redispatch_depth(&self) {
        if let Some(book) = &self.last_book {
            let snapshot =
                build_depth_snapshot(book, &self.selection, self.mode, &self.depth_config);
            self.handler.on_depth(snapshot);
        }
    }

    fn observe_connection_state(&mut self) {
        let state = self.source.connection_state();
        if state != self.last_state {
            self.last_state = state;
            self.handler.on_connection_state_change(state);
        }
    }
}
