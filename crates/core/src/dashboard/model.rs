use std::time::Instant;

use quotedesk_market_data::CircuitStatus;
use serde::Serialize;

use crate::quotes::Quote;

/// Result of one quote request.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    /// Resolved quotes in input order.
    pub quotes: Vec<Quote>,
    /// The first resolved quote.
    pub primary_quote: Option<Quote>,
    /// One message per failed symbol, in input order.
    pub errors: Vec<String>,
    /// Candlestick SVG for the primary quote.
    pub chart: Option<String>,
}

impl Dashboard {
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty() && self.errors.is_empty()
    }
}

/// Circuit breaker snapshot for one provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderStatus {
    pub provider: String,
    pub state: String,
    pub failure_count: u32,
    pub seconds_since_last_failure: Option<u64>,
}

impl From<CircuitStatus> for ProviderStatus {
    fn from(status: CircuitStatus) -> Self {
        let now = Instant::now();
        Self {
            provider: status.provider,
            state: status.state.to_string(),
            failure_count: status.failure_count,
            seconds_since_last_failure: status
                .last_failure
                .map(|at| now.saturating_duration_since(at).as_secs()),
        }
    }
}
