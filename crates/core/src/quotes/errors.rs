//! Per-symbol resolution failures.

use thiserror::Error;

/// Why a symbol could not be resolved.
///
/// Both variants are soft: the caller records the message and moves on to
/// the next symbol.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The equity provider has no usable record for the symbol.
    #[error("Data not found for symbol: {0}")]
    NotFound(String),

    /// The equity provider call failed; the message is surfaced verbatim.
    #[error("Error fetching {symbol}: {message}")]
    Provider { symbol: String, message: String },
}

impl ResolveError {
    pub fn symbol(&self) -> &str {
        match self {
            Self::NotFound(symbol) => symbol,
            Self::Provider { symbol, .. } => symbol,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ResolveError::NotFound("ZZZQQQ".to_string()).to_string(),
            "Data not found for symbol: ZZZQQQ"
        );
        let err = ResolveError::Provider {
            symbol: "AAPL".to_string(),
            message: "Network error: connection refused".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Error fetching AAPL: Network error: connection refused"
        );
        assert_eq!(err.symbol(), "AAPL");
    }
}
