//! Quotes module - quote model, symbol routing and the quote resolver.

pub mod constants;
mod errors;
mod model;
mod resolver;
mod routing;

pub use errors::ResolveError;
pub use model::{price_change, ConvertedValues, Quote};
pub use resolver::QuoteResolver;
pub use routing::{has_quote_asset_suffix, to_trading_pair, SymbolRoute};
