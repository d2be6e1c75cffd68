//! Symbol routing between the equity and digital-asset providers.

use super::constants::{
    DEFAULT_QUOTE_ASSET, DIGITAL_ASSET_MAX_SYMBOL_LEN, DIGITAL_ASSET_QUOTE_SUFFIXES,
};

/// Which provider a symbol is tried against first.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SymbolRoute {
    /// Digital-asset provider first, equity provider as fallback.
    DigitalAsset,
    /// Equity provider only.
    Equity,
}

impl SymbolRoute {
    /// Classify an upper-cased symbol.
    ///
    /// Pairs ending in a known quote asset and short symbols (≤ 5 chars)
    /// route to the digital-asset provider.
    pub fn classify(symbol: &str) -> Self {
        let ends_with_quote_asset = DIGITAL_ASSET_QUOTE_SUFFIXES
            .iter()
            .any(|suffix| symbol.ends_with(suffix));

        if ends_with_quote_asset || symbol.chars().count() <= DIGITAL_ASSET_MAX_SYMBOL_LEN {
            Self::DigitalAsset
        } else {
            Self::Equity
        }
    }
}

/// True when `symbol` is a pair, i.e. a base asset followed by a known quote
/// asset. A bare quote asset such as `BTC` is a base asset, not a pair.
pub fn has_quote_asset_suffix(symbol: &str) -> bool {
    DIGITAL_ASSET_QUOTE_SUFFIXES
        .iter()
        .any(|suffix| symbol.len() > suffix.len() && symbol.ends_with(suffix))
}

/// Normalize a symbol to a trading pair, appending the default quote asset
/// unless one is already present.
pub fn to_trading_pair(symbol: &str) -> String {
    if has_quote_asset_suffix(symbol) {
        symbol.to_string()
    } else {
        format!("{}{}", symbol, DEFAULT_QUOTE_ASSET)
    }
}
