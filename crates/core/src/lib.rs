//! Quotedesk Core - quote resolution, currency normalization and charting.
//!
//! This crate holds the per-request logic behind the quote page. It is
//! transport-agnostic: the server crate wires real providers in and renders
//! the resulting [`Dashboard`].

pub mod chart;
pub mod dashboard;
pub mod errors;
pub mod fx;
pub mod quotes;

pub use dashboard::{parse_symbols, Dashboard, DashboardService, DashboardServiceTrait};
pub use fx::{CurrencyNormalizer, RequestRates};
pub use quotes::{Quote, QuoteResolver, ResolveError, SymbolRoute};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
