//! Dashboard module - one request's worth of quotes, errors and chart.

mod model;
mod service;

pub use model::{Dashboard, ProviderStatus};
pub use service::{parse_symbols, DashboardService, DashboardServiceTrait};
