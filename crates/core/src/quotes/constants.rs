/// Quote-asset suffixes that mark a symbol as a digital-asset trading pair.
pub const DIGITAL_ASSET_QUOTE_SUFFIXES: [&str; 4] = ["USDT", "BTC", "ETH", "BUSD"];

/// Symbols this short are tried as digital assets first.
pub const DIGITAL_ASSET_MAX_SYMBOL_LEN: usize = 5;

/// Quote asset appended to bare digital-asset symbols.
pub const DEFAULT_QUOTE_ASSET: &str = "USDT";

/// Currency attached to every digital-asset quote.
pub const DIGITAL_ASSET_CURRENCY: &str = "USDT";

/// Currency assumed when the equity provider omits one.
pub const DEFAULT_EQUITY_CURRENCY: &str = "USD";
