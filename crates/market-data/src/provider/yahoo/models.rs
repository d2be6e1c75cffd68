//! Yahoo Finance API response models.
//!
//! These models are used for parsing the quoteSummary API responses, which
//! carry the descriptive fields the chart endpoint lacks.

use serde::Deserialize;

/// Main response wrapper for quoteSummary API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteSummaryResponse {
    pub quote_summary: YahooQuoteSummary,
}

/// Quote summary container
#[derive(Debug, Deserialize)]
pub struct YahooQuoteSummary {
    #[serde(default)]
    pub result: Option<Vec<YahooQuoteSummaryResult>>,
    #[serde(default)]
    pub error: Option<YahooQuoteSummaryError>,
}

/// Error block returned alongside a null result
#[derive(Debug, Deserialize)]
pub struct YahooQuoteSummaryError {
    pub code: Option<String>,
    pub description: Option<String>,
}

/// Individual result from quoteSummary API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteSummaryResult {
    pub price: Option<YahooPriceData>,
    pub summary_detail: Option<YahooSummaryDetail>,
    pub financial_data: Option<YahooFinancialData>,
}

/// Price module
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooPriceData {
    pub symbol: Option<String>,
    pub currency: Option<String>,
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    pub regular_market_price: Option<YahooPriceDetail>,
    pub regular_market_previous_close: Option<YahooPriceDetail>,
    pub regular_market_open: Option<YahooPriceDetail>,
    pub regular_market_day_high: Option<YahooPriceDetail>,
    pub regular_market_day_low: Option<YahooPriceDetail>,
    pub market_cap: Option<YahooPriceDetail>,
}

/// Price detail with raw and formatted values.
/// Yahoo sends `{}` when a value is unavailable, hence the optional raw.
#[derive(Debug, Deserialize, Clone)]
pub struct YahooPriceDetail {
    pub raw: Option<f64>,
}

/// Summary detail module (session statistics)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooSummaryDetail {
    pub previous_close: Option<YahooPriceDetail>,
    pub open: Option<YahooPriceDetail>,
    pub day_high: Option<YahooPriceDetail>,
    pub day_low: Option<YahooPriceDetail>,
    pub market_cap: Option<YahooPriceDetail>,
    pub currency: Option<String>,
}

/// Financial data module; only the current price is used
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooFinancialData {
    pub current_price: Option<YahooPriceDetail>,
}
