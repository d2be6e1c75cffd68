//! Market data models
//!
//! - `types` - Type aliases for common identifiers (ProviderId)
//! - `snapshot` - Latest-quote payloads as returned by providers
//! - `bar` - Daily OHLC history bars

mod bar;
mod snapshot;
mod types;

pub use bar::DailyBar;
pub use snapshot::{EquitySnapshot, TickerSnapshot};
pub use types::ProviderId;
