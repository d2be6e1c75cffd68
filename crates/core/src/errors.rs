//! Core error types for Quotedesk.

use quotedesk_market_data::MarketDataError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the core crate.
///
/// Per-symbol resolution failures are not represented here; they are soft
/// failures reported through [`crate::quotes::ResolveError`].
#[derive(Error, Debug)]
pub enum Error {
    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Chart rendering failed: {0}")]
    Chart(String),

    #[error("Not enough history to chart {0}")]
    EmptyHistory(String),
}

impl Error {
    /// Returns true when there is simply nothing to show for the symbol.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::MarketData(e) => e.is_not_found(),
            Self::EmptyHistory(_) => true,
            Self::Chart(_) => false,
        }
    }
}
