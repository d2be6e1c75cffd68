//! Yahoo Finance market data provider.
//!
//! This provider uses the Yahoo Finance API to fetch:
//! - Equity/ETF/index snapshots via quoteSummary (e.g., AAPL, RELIANCE.NS)
//! - Daily price history via the chart endpoint
//! - Spot foreign exchange rates (e.g., USDINR=X)

mod models;

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use lazy_static::lazy_static;
use num_traits::FromPrimitive;
use reqwest::header;
use rust_decimal::Decimal;
use time::OffsetDateTime;
use tracing::{debug, warn};
use urlencoding::encode;
use yahoo_finance_api as yahoo;

use crate::errors::MarketDataError;
use crate::models::{DailyBar, EquitySnapshot};
use crate::provider::{EquityDataProvider, FxRateProvider};

use models::{YahooPriceDetail, YahooQuoteSummaryResponse, YahooQuoteSummaryResult};

const PROVIDER_ID: &str = "YAHOO";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

const SUMMARY_MODULES: &str = "price,summaryDetail,financialData";

// ============================================================================
// Crumb/Cookie Authentication
// ============================================================================

/// Cached Yahoo authentication data
#[derive(Debug, Clone)]
struct CrumbData {
    cookie: String,
    crumb: String,
}

lazy_static! {
    /// Global cache for Yahoo authentication crumb
    static ref YAHOO_CRUMB: RwLock<Option<CrumbData>> = RwLock::default();
}

fn read_crumb() -> RwLockReadGuard<'static, Option<CrumbData>> {
    YAHOO_CRUMB.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write_crumb() -> RwLockWriteGuard<'static, Option<CrumbData>> {
    YAHOO_CRUMB
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

// ============================================================================
// Yahoo Provider
// ============================================================================

/// Yahoo Finance market data provider.
///
/// Serves as the equity-data provider (snapshots and history) and as the
/// FX-rate provider.
pub struct YahooProvider {
    connector: yahoo::YahooConnector,
    client: reqwest::Client,
}

impl YahooProvider {
    /// Create a new Yahoo Finance provider.
    pub fn new() -> Result<Self, MarketDataError> {
        let connector = yahoo::YahooConnector::new().map_err(|e| {
            MarketDataError::provider(
                PROVIDER_ID,
                format!("Failed to initialize Yahoo connector: {}", e),
            )
        })?;
        Ok(Self {
            connector,
            client: reqwest::Client::new(),
        })
    }

    // ========================================================================
    // Crumb/Cookie Authentication
    // ========================================================================

    /// Ensure we have a valid Yahoo authentication crumb.
    async fn ensure_crumb(&self) -> Result<CrumbData, MarketDataError> {
        if let Some(crumb) = read_crumb().as_ref() {
            return Ok(crumb.clone());
        }

        self.fetch_crumb().await
    }

    /// Fetch a new Yahoo authentication crumb.
    async fn fetch_crumb(&self) -> Result<CrumbData, MarketDataError> {
        // Step 1: Get cookie from fc.yahoo.com
        let response = self
            .client
            .get("https://fc.yahoo.com")
            .send()
            .await
            .map_err(|e| {
                MarketDataError::provider(PROVIDER_ID, format!("Failed to get cookie: {}", e))
            })?;

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.split_once(';').map(|(v, _)| v.to_string()))
            .ok_or_else(|| MarketDataError::provider(PROVIDER_ID, "Failed to parse Yahoo cookie"))?;

        // Step 2: Get crumb using cookie
        let crumb = self
            .client
            .get("https://query1.finance.yahoo.com/v1/test/getcrumb")
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::COOKIE, &cookie)
            .send()
            .await
            .map_err(|e| {
                MarketDataError::provider(PROVIDER_ID, format!("Failed to get crumb: {}", e))
            })?
            .text()
            .await
            .map_err(|e| {
                MarketDataError::provider(PROVIDER_ID, format!("Failed to read crumb: {}", e))
            })?;

        let crumb_data = CrumbData { cookie, crumb };
        *write_crumb() = Some(crumb_data.clone());

        Ok(crumb_data)
    }

    /// Clear the cached crumb (used when authentication fails)
    fn clear_crumb(&self) {
        *write_crumb() = None;
    }

    // ========================================================================
    // Snapshot Fetching
    // ========================================================================

    async fn fetch_quote_summary(&self, symbol: &str) -> Result<EquitySnapshot, MarketDataError> {
        let crumb = self.ensure_crumb().await?;

        let url = format!(
            "https://query1.finance.yahoo.com/v10/finance/quoteSummary/{}?modules={}&crumb={}",
            encode(symbol),
            SUMMARY_MODULES,
            encode(&crumb.crumb)
        );

        let response = self
            .client
            .get(&url)
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::COOKIE, &crumb.cookie)
            .send()
            .await?;

        match response.status() {
            reqwest::StatusCode::UNAUTHORIZED => {
                self.clear_crumb();
                return Err(MarketDataError::provider(
                    PROVIDER_ID,
                    "Yahoo authentication expired",
                ));
            }
            reqwest::StatusCode::NOT_FOUND => {
                return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
            }
            status if !status.is_success() => {
                return Err(MarketDataError::provider(
                    PROVIDER_ID,
                    format!("quoteSummary returned HTTP {}", status.as_u16()),
                ));
            }
            _ => {}
        }

        let data: YahooQuoteSummaryResponse = response.json().await.map_err(|e| {
            MarketDataError::provider(
                PROVIDER_ID,
                format!("Failed to parse quoteSummary response: {}", e),
            )
        })?;

        if let Some(error) = data.quote_summary.error {
            debug!(
                "quoteSummary error for {}: {:?} {:?}",
                symbol, error.code, error.description
            );
        }

        let result = data
            .quote_summary
            .result
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))?;

        Ok(map_quote_summary(&result))
    }

    /// Convert chrono DateTime<Utc> to time::OffsetDateTime for the Yahoo API.
    fn chrono_to_offset_datetime(dt: DateTime<Utc>) -> OffsetDateTime {
        OffsetDateTime::from_unix_timestamp(dt.timestamp())
            .unwrap_or_else(|_| OffsetDateTime::now_utc())
    }

    fn map_yahoo_error(symbol: &str, e: yahoo::YahooError) -> MarketDataError {
        if matches!(e, yahoo::YahooError::NoQuotes | yahoo::YahooError::NoResult) {
            MarketDataError::SymbolNotFound(symbol.to_string())
        } else {
            MarketDataError::provider(PROVIDER_ID, e.to_string())
        }
    }
}

// ============================================================================
// Provider Implementations
// ============================================================================

#[async_trait]
impl EquityDataProvider for YahooProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_equity_snapshot(&self, symbol: &str) -> Result<EquitySnapshot, MarketDataError> {
        debug!("Fetching snapshot for {} from Yahoo", symbol);
        self.fetch_quote_summary(symbol).await
    }

    async fn get_daily_history(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<DailyBar>, MarketDataError> {
        debug!(
            "Fetching daily history for {} from {} to {} from Yahoo",
            symbol,
            start.format("%Y-%m-%d"),
            end.format("%Y-%m-%d")
        );

        let response = self
            .connector
            .get_quote_history(
                symbol,
                Self::chrono_to_offset_datetime(start),
                Self::chrono_to_offset_datetime(end),
            )
            .await
            .map_err(|e| Self::map_yahoo_error(symbol, e))?;

        match response.quotes() {
            Ok(yahoo_quotes) => {
                let bars: Vec<DailyBar> = yahoo_quotes
                    .into_iter()
                    .filter_map(|q| {
                        let bar = yahoo_quote_to_bar(&q);
                        if bar.is_none() {
                            warn!("Skipping unparseable bar for {} at {}", symbol, q.timestamp);
                        }
                        bar
                    })
                    .collect();

                if bars.is_empty() {
                    return Err(MarketDataError::NoDataForRange);
                }
                Ok(bars)
            }
            Err(yahoo::YahooError::NoQuotes) => Err(MarketDataError::NoDataForRange),
            Err(e) => Err(MarketDataError::provider(PROVIDER_ID, e.to_string())),
        }
    }
}

#[async_trait]
impl FxRateProvider for YahooProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_spot_rate(&self, from: &str, to: &str) -> Result<Decimal, MarketDataError> {
        let symbol = fx_symbol(from, to);
        debug!("Fetching spot rate {} from Yahoo", symbol);

        let response = self
            .connector
            .get_latest_quotes(&symbol, "1d")
            .await
            .map_err(|e| Self::map_yahoo_error(&symbol, e))?;

        let quote = response
            .last_quote()
            .map_err(|e| Self::map_yahoo_error(&symbol, e))?;

        Decimal::from_f64(quote.close).ok_or_else(|| MarketDataError::ValidationFailed {
            message: format!("Invalid close {} for {}", quote.close, symbol),
        })
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Yahoo FX symbol for a currency pair, e.g. `USDINR=X`.
fn fx_symbol(from: &str, to: &str) -> String {
    format!("{}{}=X", from, to)
}

fn raw_decimal(detail: Option<&YahooPriceDetail>) -> Option<Decimal> {
    detail.and_then(|d| d.raw).and_then(Decimal::from_f64)
}

/// Map a quoteSummary result to an [`EquitySnapshot`].
///
/// `financialData.currentPrice` wins over `price.regularMarketPrice`;
/// session statistics prefer `summaryDetail` and fall back to the price module.
fn map_quote_summary(result: &YahooQuoteSummaryResult) -> EquitySnapshot {
    let price = result.price.as_ref();
    let detail = result.summary_detail.as_ref();
    let financial = result.financial_data.as_ref();

    EquitySnapshot {
        symbol: price.and_then(|p| p.symbol.clone()),
        long_name: price.and_then(|p| p.long_name.clone()),
        short_name: price.and_then(|p| p.short_name.clone()),
        currency: price
            .and_then(|p| p.currency.clone())
            .or_else(|| detail.and_then(|d| d.currency.clone())),
        current_price: raw_decimal(financial.and_then(|f| f.current_price.as_ref()))
            .or_else(|| raw_decimal(price.and_then(|p| p.regular_market_price.as_ref()))),
        previous_close: raw_decimal(detail.and_then(|d| d.previous_close.as_ref())).or_else(
            || raw_decimal(price.and_then(|p| p.regular_market_previous_close.as_ref())),
        ),
        open: raw_decimal(detail.and_then(|d| d.open.as_ref()))
            .or_else(|| raw_decimal(price.and_then(|p| p.regular_market_open.as_ref()))),
        day_high: raw_decimal(detail.and_then(|d| d.day_high.as_ref()))
            .or_else(|| raw_decimal(price.and_then(|p| p.regular_market_day_high.as_ref()))),
        day_low: raw_decimal(detail.and_then(|d| d.day_low.as_ref()))
            .or_else(|| raw_decimal(price.and_then(|p| p.regular_market_day_low.as_ref()))),
        market_cap: raw_decimal(detail.and_then(|d| d.market_cap.as_ref()))
            .or_else(|| raw_decimal(price.and_then(|p| p.market_cap.as_ref()))),
    }
}

fn yahoo_quote_to_bar(q: &yahoo::Quote) -> Option<DailyBar> {
    let timestamp = Utc.timestamp_opt(q.timestamp, 0).single()?;
    Some(DailyBar {
        timestamp,
        open: Decimal::from_f64(q.open)?,
        high: Decimal::from_f64(q.high)?,
        low: Decimal::from_f64(q.low)?,
        close: Decimal::from_f64(q.close)?,
    })
}

// ============================================================================
// Tests
// ============================================================================
