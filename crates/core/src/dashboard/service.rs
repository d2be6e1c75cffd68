use async_trait::async_trait;
use log::{debug, info};

use super::model::{Dashboard, ProviderStatus};
use crate::chart::ChartService;
use crate::fx::{CurrencyNormalizer, RequestRates};
use crate::quotes::QuoteResolver;

/// Split a comma-separated symbol list into trimmed, upper-cased symbols.
///
/// Empty entries are dropped; an absent or blank input yields no symbols.
pub fn parse_symbols(raw: Option<&str>) -> Vec<String> {
    raw.map(|raw| {
        raw.split(',')
            .map(|s| s.trim().to_uppercase())
            .filter(|s| !s.is_empty())
            .collect()
    })
    .unwrap_or_default()
}

/// Trait defining the contract for the quote page.
#[async_trait]
pub trait DashboardServiceTrait: Send + Sync {
    /// Resolve, normalize and chart a raw comma-separated symbol list.
    async fn build_dashboard(&self, raw_symbols: Option<&str>) -> Dashboard;

    /// Candlestick SVG for a single symbol's recent history.
    async fn render_chart(&self, symbol: &str) -> crate::Result<String>;

    /// Circuit breaker status of the digital-asset provider.
    fn provider_status(&self) -> Vec<ProviderStatus>;
}

pub struct DashboardService {
    resolver: QuoteResolver,
    normalizer: CurrencyNormalizer,
    charts: ChartService,
}

impl DashboardService {
    pub fn new(resolver: QuoteResolver, normalizer: CurrencyNormalizer, charts: ChartService) -> Self {
        Self {
            resolver,
            normalizer,
            charts,
        }
    }
}

#[async_trait]
impl DashboardServiceTrait for DashboardService {
    async fn build_dashboard(&self, raw_symbols: Option<&str>) -> Dashboard {
        let symbols = parse_symbols(raw_symbols);
        if symbols.is_empty() {
            return Dashboard::default();
        }

        let rates = RequestRates::new();
        let mut dashboard = Dashboard::default();

        for symbol in &symbols {
            match self.resolver.resolve(symbol).await {
                Ok(mut quote) => {
                    self.normalizer.normalize(&mut quote, &rates).await;
                    dashboard.quotes.push(quote);
                }
                Err(e) => {
                    info!("Could not resolve {}: {}", symbol, e);
                    dashboard.errors.push(e.to_string());
                }
            }
        }

        dashboard.primary_quote = dashboard.quotes.first().cloned();
        if let Some(primary) = &dashboard.primary_quote {
            dashboard.chart = self.charts.render_for(&primary.symbol).await;
        }

        debug!(
            "Built dashboard: {} quotes, {} errors, chart: {}",
            dashboard.quotes.len(),
            dashboard.errors.len(),
            dashboard.chart.is_some()
        );
        dashboard
    }

    async fn render_chart(&self, symbol: &str) -> crate::Result<String> {
        self.charts.render(symbol).await
    }

    fn provider_status(&self) -> Vec<ProviderStatus> {
        let provider = self.resolver.digital_asset_provider_id();
        vec![ProviderStatus::from(self.resolver.breaker().status(&provider))]
    }
}
