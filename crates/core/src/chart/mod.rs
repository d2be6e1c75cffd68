//! Chart module - trailing daily history rendered as a candlestick SVG.

mod candlestick;

pub use candlestick::render_candlestick_svg;

use std::sync::Arc;

use chrono::{Duration, Utc};
use log::{debug, warn};
use quotedesk_market_data::EquityDataProvider;

pub const DEFAULT_CHART_WIDTH: u32 = 900;
pub const DEFAULT_CHART_HEIGHT: u32 = 420;

/// Days of daily history shown on the chart.
pub const CHART_LOOKBACK_DAYS: i64 = 30;

/// Renders the price chart for the primary quote.
pub struct ChartService {
    equity: Arc<dyn EquityDataProvider>,
    width: u32,
    height: u32,
}

impl ChartService {
    pub fn new(equity: Arc<dyn EquityDataProvider>) -> Self {
        Self::with_size(equity, DEFAULT_CHART_WIDTH, DEFAULT_CHART_HEIGHT)
    }

    pub fn with_size(equity: Arc<dyn EquityDataProvider>, width: u32, height: u32) -> Self {
        Self {
            equity,
            width,
            height,
        }
    }

    /// Candlestick SVG for the last month of `symbol`.
    pub async fn render(&self, symbol: &str) -> crate::Result<String> {
        let end = Utc::now();
        let start = end - Duration::days(CHART_LOOKBACK_DAYS);

        let bars = self.equity.get_daily_history(symbol, start, end).await?;
        render_candlestick_svg(symbol, &bars, self.width, self.height)
    }

    /// Like [`ChartService::render`], but a missing chart is not an error.
    pub async fn render_for(&self, symbol: &str) -> Option<String> {
        match self.render(symbol).await {
            Ok(svg) => Some(svg),
            Err(e) if e.is_not_found() => {
                debug!("No chart for {}: {}", symbol, e);
                None
            }
            Err(e) => {
                warn!("Failed to chart {}: {}", symbol, e);
                None
            }
        }
    }
}
