//! FX module - conversion of quote values into the target currency.

mod normalizer;

pub use normalizer::{
    ConversionPolicy, CurrencyNormalizer, RequestRates, DOLLAR_EQUIVALENT_CURRENCIES,
    FX_PEER_CURRENCY, TARGET_CURRENCY,
};
