//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur while talking to a market data provider.
///
/// Providers never panic on bad upstream payloads; every failure is mapped to
/// one of these variants so callers can tell "the symbol does not exist"
/// apart from "the call itself failed".
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The requested symbol was not found by the provider.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// No data available for the requested date range.
    #[error("No data for date range")]
    NoDataForRange,

    /// A provider-specific error occurred.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider returned data that could not be interpreted.
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// Description of the validation failure
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Returns true when the provider answered but had nothing for the symbol.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::SymbolNotFound(_) | Self::NoDataForRange)
    }

    /// Shorthand for a [`MarketDataError::ProviderError`].
    pub fn provider(provider: &str, message: impl Into<String>) -> Self {
        Self::ProviderError {
            provider: provider.to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        assert!(MarketDataError::SymbolNotFound("ZZZ".to_string()).is_not_found());
        assert!(MarketDataError::NoDataForRange.is_not_found());
        assert!(!MarketDataError::provider("YAHOO", "boom").is_not_found());
        assert!(!MarketDataError::ValidationFailed {
            message: "bad price".to_string()
        }
        .is_not_found());
    }

    #[test]
    fn test_error_display() {
        let error = MarketDataError::SymbolNotFound("INVALID".to_string());
        assert_eq!(format!("{}", error), "Symbol not found: INVALID");

        let error = MarketDataError::ValidationFailed {
            message: "bad price".to_string(),
        };
        assert_eq!(format!("{}", error), "Validation failed: bad price");

        let error = MarketDataError::provider("YAHOO", "HTTP 500");
        assert_eq!(format!("{}", error), "Provider error: YAHOO - HTTP 500");
    }
}
