//! Market data provider trait definitions.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::errors::MarketDataError;
use crate::models::{DailyBar, EquitySnapshot, TickerSnapshot};

/// Provider of equity, index and FX instrument data.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use quotedesk_market_data::provider::EquityDataProvider;
///
/// struct MyProvider;
///
/// #[async_trait]
/// impl EquityDataProvider for MyProvider {
///     fn id(&self) -> &'static str {
///         "MY_PROVIDER"
///     }
///
///     // ... implement the lookups
/// }
/// ```
#[async_trait]
pub trait EquityDataProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs and error messages.
    fn id(&self) -> &'static str;

    /// Fetch descriptive and quote fields for the exact symbol.
    ///
    /// Returns [`MarketDataError::SymbolNotFound`] when the provider has no
    /// record of the symbol.
    async fn get_equity_snapshot(&self, symbol: &str) -> Result<EquitySnapshot, MarketDataError>;

    /// Fetch daily OHLC bars between `start` and `end`, ordered by timestamp
    /// ascending.
    async fn get_daily_history(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<DailyBar>, MarketDataError>;
}

/// Provider of digital-asset ticker snapshots.
#[async_trait]
pub trait DigitalAssetProvider: Send + Sync {
    /// Unique identifier for this provider, also the circuit breaker key.
    fn id(&self) -> &'static str;

    /// Fetch the 24h ticker snapshot for a normalized trading pair
    /// (e.g. `BTCUSDT`).
    async fn get_ticker(&self, pair: &str) -> Result<TickerSnapshot, MarketDataError>;
}

/// Provider of spot foreign-exchange rates.
#[async_trait]
pub trait FxRateProvider: Send + Sync {
    fn id(&self) -> &'static str;

    /// Most recent closing spot rate for one unit of `from` in `to`.
    async fn get_spot_rate(&self, from: &str, to: &str) -> Result<Decimal, MarketDataError>;
}
