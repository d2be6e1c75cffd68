//! Market data provider abstractions and implementations.
//!
//! This module contains:
//! - The provider traits, one per kind of upstream lookup
//! - Concrete provider implementations (Yahoo Finance, Binance)
//!
//! Providers are thin: they issue a request, map the payload into the
//! crate models and classify failures. Routing between providers lives in
//! the core crate.

mod traits;

pub mod binance;
pub mod yahoo;

pub use traits::{DigitalAssetProvider, EquityDataProvider, FxRateProvider};
