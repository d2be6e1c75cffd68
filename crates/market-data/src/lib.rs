//! Quotedesk Market Data Crate
//!
//! Thin clients for the upstream data providers used by Quotedesk.
//!
//! # Overview
//!
//! - Equity snapshots and daily history: Yahoo Finance
//! - Digital-asset ticker snapshots: Binance
//! - Spot FX rates: Yahoo Finance
//! - A per-provider circuit breaker shared across requests
//!
//! # Core Types
//!
//! - [`EquitySnapshot`] - Descriptive and price fields for an equity
//! - [`TickerSnapshot`] - 24h ticker for a digital-asset pair
//! - [`DailyBar`] - One OHLC bar of daily history
//! - [`MarketDataError`] - Classified provider failure

pub mod errors;
pub mod models;
pub mod provider;
pub mod registry;

pub use errors::MarketDataError;

pub use models::{DailyBar, EquitySnapshot, ProviderId, TickerSnapshot};

pub use provider::binance::BinanceProvider;
pub use provider::yahoo::YahooProvider;
pub use provider::{DigitalAssetProvider, EquityDataProvider, FxRateProvider};

pub use registry::{CircuitBreaker, CircuitState, CircuitStatus};
