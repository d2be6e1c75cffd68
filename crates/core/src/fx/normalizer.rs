//! Currency normalizer with a request-scoped FX memo.

use std::sync::Arc;

use log::{debug, warn};
use quotedesk_market_data::FxRateProvider;
use rust_decimal::Decimal;
use tokio::sync::OnceCell;

use crate::quotes::Quote;

/// Currency every quote is converted into.
pub const TARGET_CURRENCY: &str = "INR";

/// Currency whose spot rate into the target is fetched.
pub const FX_PEER_CURRENCY: &str = "USD";

/// Currencies converted at the USD rate.
pub const DOLLAR_EQUIVALENT_CURRENCIES: [&str; 3] = ["USD", "USDT", "BUSD"];

/// How a quote currency maps to the target currency.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConversionPolicy {
    /// Already in the target currency, factor 1.
    Identity,
    /// Converted at the USD spot rate.
    DollarRate,
    /// No conversion available.
    Unsupported,
}

impl ConversionPolicy {
    pub fn for_currency(currency: &str) -> Self {
        if currency == TARGET_CURRENCY {
            Self::Identity
        } else if DOLLAR_EQUIVALENT_CURRENCIES.contains(&currency) {
            Self::DollarRate
        } else {
            Self::Unsupported
        }
    }
}

/// Exchange rates memoized for the duration of one request.
///
/// The USD rate is fetched at most once; a failed fetch is remembered as
/// unavailable and not retried within the request.
#[derive(Debug, Default)]
pub struct RequestRates {
    usd_rate: OnceCell<Option<Decimal>>,
}

impl RequestRates {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Determines conversion factors and applies them to quotes.
pub struct CurrencyNormalizer {
    fx: Arc<dyn FxRateProvider>,
}

impl CurrencyNormalizer {
    pub fn new(fx: Arc<dyn FxRateProvider>) -> Self {
        Self { fx }
    }

    /// Conversion factor from `currency` into the target currency, or `None`
    /// if it cannot be determined.
    pub async fn conversion_factor(&self, currency: &str, rates: &RequestRates) -> Option<Decimal> {
        match ConversionPolicy::for_currency(currency) {
            ConversionPolicy::Identity => Some(Decimal::ONE),
            ConversionPolicy::DollarRate => {
                *rates
                    .usd_rate
                    .get_or_init(|| self.fetch_usd_rate())
                    .await
            }
            ConversionPolicy::Unsupported => {
                debug!("No conversion from {} to {}", currency, TARGET_CURRENCY);
                None
            }
        }
    }

    /// Annotate a quote with its conversion rate and converted values.
    pub async fn normalize(&self, quote: &mut Quote, rates: &RequestRates) {
        let factor = self.conversion_factor(&quote.currency, rates).await;
        quote.apply_conversion(factor);
    }

    async fn fetch_usd_rate(&self) -> Option<Decimal> {
        match self
            .fx
            .get_spot_rate(FX_PEER_CURRENCY, TARGET_CURRENCY)
            .await
        {
            Ok(rate) if rate > Decimal::ZERO => {
                debug!("{}/{} spot rate: {}", FX_PEER_CURRENCY, TARGET_CURRENCY, rate);
                Some(rate)
            }
            Ok(rate) => {
                warn!(
                    "Ignoring non-positive {}/{} rate {}",
                    FX_PEER_CURRENCY, TARGET_CURRENCY, rate
                );
                None
            }
            Err(e) => {
                warn!(
                    "{}/{} rate unavailable from {}: {}",
                    FX_PEER_CURRENCY,
                    TARGET_CURRENCY,
                    self.fx.id(),
                    e
                );
                None
            }
        }
    }
}
