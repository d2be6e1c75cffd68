//! Quote resolver - routes a symbol to a provider and maps the response.

use std::borrow::Cow;
use std::sync::Arc;

use log::{debug, info, warn};
use quotedesk_market_data::{
    CircuitBreaker, DigitalAssetProvider, EquityDataProvider, EquitySnapshot, ProviderId,
    TickerSnapshot,
};

use super::constants::{DEFAULT_EQUITY_CURRENCY, DIGITAL_ASSET_CURRENCY};
use super::errors::ResolveError;
use super::model::{price_change, ConvertedValues, Quote};
use super::routing::{to_trading_pair, SymbolRoute};

/// Resolves one symbol at a time into a [`Quote`].
///
/// Digital-asset-shaped symbols are tried against the digital-asset provider
/// first. A failed attempt trips the injected circuit breaker and the symbol
/// falls back to the equity provider. Once the breaker is open the
/// digital-asset provider is skipped entirely.
pub struct QuoteResolver {
    equity: Arc<dyn EquityDataProvider>,
    digital_asset: Arc<dyn DigitalAssetProvider>,
    breaker: Arc<CircuitBreaker>,
}

impl QuoteResolver {
    pub fn new(
        equity: Arc<dyn EquityDataProvider>,
        digital_asset: Arc<dyn DigitalAssetProvider>,
        breaker: Arc<CircuitBreaker>,
    ) -> Self {
        Self {
            equity,
            digital_asset,
            breaker,
        }
    }

    pub fn breaker(&self) -> &Arc<CircuitBreaker> {
        &self.breaker
    }

    /// Circuit breaker key of the digital-asset provider.
    pub fn digital_asset_provider_id(&self) -> ProviderId {
        Cow::Borrowed(self.digital_asset.id())
    }

    /// Resolve a trimmed, upper-cased symbol.
    pub async fn resolve(&self, symbol: &str) -> Result<Quote, ResolveError> {
        if SymbolRoute::classify(symbol) == SymbolRoute::DigitalAsset {
            if let Some(quote) = self.resolve_digital_asset(symbol).await {
                return Ok(quote);
            }
            debug!("Falling back to equity provider for {}", symbol);
        }

        self.resolve_equity(symbol).await
    }

    /// Returns `None` on any failure, including an open circuit.
    async fn resolve_digital_asset(&self, symbol: &str) -> Option<Quote> {
        let provider_id = self.digital_asset_provider_id();
        if !self.breaker.is_allowed(&provider_id) {
            debug!(
                "Skipping {} for {}: provider marked unavailable",
                provider_id, symbol
            );
            return None;
        }

        let pair = to_trading_pair(symbol);
        match self.digital_asset.get_ticker(&pair).await {
            Ok(ticker) => {
                self.breaker.record_success(&provider_id);
                Some(ticker_to_quote(ticker, self.digital_asset.id()))
            }
            Err(e) => {
                warn!(
                    "{} lookup for {} failed, disabling provider: {}",
                    provider_id, pair, e
                );
                self.breaker.record_failure(&provider_id);
                None
            }
        }
    }

    async fn resolve_equity(&self, symbol: &str) -> Result<Quote, ResolveError> {
        match self.equity.get_equity_snapshot(symbol).await {
            Ok(snapshot) if snapshot.has_name() => {
                Ok(snapshot_to_quote(symbol, snapshot, self.equity.id()))
            }
            Ok(_) => {
                info!("{} returned no name for {}", self.equity.id(), symbol);
                Err(ResolveError::NotFound(symbol.to_string()))
            }
            Err(e) if e.is_not_found() => Err(ResolveError::NotFound(symbol.to_string())),
            Err(e) => Err(ResolveError::Provider {
                symbol: symbol.to_string(),
                message: e.to_string(),
            }),
        }
    }
}

fn ticker_to_quote(ticker: TickerSnapshot, source: &str) -> Quote {
    let (change, change_percent) = price_change(ticker.last_price, ticker.prev_close_price);

    Quote {
        display_name: ticker.symbol.clone(),
        symbol: ticker.symbol,
        currency: DIGITAL_ASSET_CURRENCY.to_string(),
        price: ticker.last_price,
        previous_close: ticker.prev_close_price,
        open: ticker.open_price,
        day_high: ticker.high_price,
        day_low: ticker.low_price,
        market_cap: None,
        change,
        change_percent,
        converted: ConvertedValues::default(),
        conversion_rate: None,
        source: source.to_string(),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn snapshot_to_quote(requested: &str, snapshot: EquitySnapshot, source: &str) -> Quote {
    let (change, change_percent) = price_change(snapshot.current_price, snapshot.previous_close);

    let display_name = snapshot
        .display_name()
        .unwrap_or(requested)
        .to_string();

    Quote {
        symbol: non_empty(snapshot.symbol).unwrap_or_else(|| requested.to_string()),
        display_name,
        currency: non_empty(snapshot.currency)
            .unwrap_or_else(|| DEFAULT_EQUITY_CURRENCY.to_string()),
        price: snapshot.current_price,
        previous_close: snapshot.previous_close,
        open: snapshot.open,
        day_high: snapshot.day_high,
        day_low: snapshot.day_low,
        market_cap: snapshot.market_cap,
        change,
        change_percent,
        converted: ConvertedValues::default(),
        conversion_rate: None,
        source: source.to_string(),
    }
}
