use std::sync::Arc;

use crate::config::Config;
use quotedesk_core::{
    chart::ChartService,
    fx::CurrencyNormalizer,
    quotes::QuoteResolver,
    DashboardService, DashboardServiceTrait,
};
use quotedesk_market_data::{
    BinanceProvider, CircuitBreaker, DigitalAssetProvider,
    EquityDataProvider, FxRateProvider, YahooProvider,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub dashboard_service: Arc<dyn DashboardServiceTrait>,
}

pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if config.log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let yahoo = Arc::new(YahooProvider::new()?);
    let binance = Arc::new(BinanceProvider::with_base_url(config.binance_base_url.clone()));
    tracing::info!("Digital-asset provider base URL: {}", config.binance_base_url);

    Ok(build_state_with_providers(
        config,
        yahoo.clone(),
        binance,
        yahoo,
    ))
}

/// Wire the dashboard service around the given providers.
pub fn build_state_with_providers(
    config: &Config,
    equity: Arc<dyn EquityDataProvider>,
    digital_asset: Arc<dyn DigitalAssetProvider>,
    fx: Arc<dyn FxRateProvider>,
) -> Arc<AppState> {
    let breaker = Arc::new(CircuitBreaker::with_cooldown(config.crypto_breaker_cooldown));
    match config.crypto_breaker_cooldown {
        Some(cooldown) => tracing::info!(
            "Digital-asset circuit breaker resets after {}s",
            cooldown.as_secs()
        ),
        None => tracing::info!("Digital-asset circuit breaker never resets once open"),
    }

    let resolver = QuoteResolver::new(equity.clone(), digital_asset, breaker);
    let normalizer = CurrencyNormalizer::new(fx);
    let charts = ChartService::with_size(equity, config.chart_width, config.chart_height);

    let dashboard_service: Arc<dyn DashboardServiceTrait> =
        Arc::new(DashboardService::new(resolver, normalizer, charts));

    Arc::new(AppState { dashboard_service })
}
