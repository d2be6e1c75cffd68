//! Binance spot market data provider.
//!
//! Used as the digital-asset provider: one 24h ticker snapshot per
//! trading pair (e.g., BTCUSDT, ETHBTC).

mod models;

use std::str::FromStr;

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;

use crate::errors::MarketDataError;
use crate::models::TickerSnapshot;
use crate::provider::DigitalAssetProvider;

use models::{BinanceErrorBody, BinanceTicker24h};

const PROVIDER_ID: &str = "BINANCE";

/// Public Binance REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.binance.com";

/// Binance spot ticker provider.
pub struct BinanceProvider {
    client: reqwest::Client,
    base_url: String,
}

impl BinanceProvider {
    /// Create a provider against the public Binance endpoint.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a provider against a custom endpoint (mirrors, regional hosts).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

impl Default for BinanceProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DigitalAssetProvider for BinanceProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_ticker(&self, pair: &str) -> Result<TickerSnapshot, MarketDataError> {
        let url = format!("{}/api/v3/ticker/24hr", self.base_url);
        debug!("Fetching 24h ticker for {} from Binance", pair);

        let response = self
            .client
            .get(&url)
            .query(&[("symbol", pair)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_error(pair, status.as_u16(), &body));
        }

        let ticker: BinanceTicker24h = response.json().await.map_err(|e| {
            MarketDataError::provider(PROVIDER_ID, format!("Failed to parse ticker: {}", e))
        })?;

        ticker_to_snapshot(ticker)
    }
}

/// Invalid-symbol responses become `SymbolNotFound`, everything else a
/// provider error carrying Binance's message.
fn classify_error(pair: &str, status: u16, body: &str) -> MarketDataError {
    match serde_json::from_str::<BinanceErrorBody>(body) {
        Ok(err) if err.code == -1121 => MarketDataError::SymbolNotFound(pair.to_string()),
        Ok(err) => MarketDataError::provider(PROVIDER_ID, format!("HTTP {}: {}", status, err.msg)),
        Err(_) => MarketDataError::provider(PROVIDER_ID, format!("HTTP {}", status)),
    }
}

fn parse_price(field: &str, value: Option<String>) -> Result<Option<Decimal>, MarketDataError> {
    value
        .map(|raw| {
            Decimal::from_str(&raw).map_err(|e| MarketDataError::ValidationFailed {
                message: format!("Invalid {} '{}': {}", field, raw, e),
            })
        })
        .transpose()
}

fn ticker_to_snapshot(ticker: BinanceTicker24h) -> Result<TickerSnapshot, MarketDataError> {
    Ok(TickerSnapshot {
        last_price: parse_price("lastPrice", ticker.last_price)?,
        prev_close_price: parse_price("prevClosePrice", ticker.prev_close_price)?,
        open_price: parse_price("openPrice", ticker.open_price)?,
        high_price: parse_price("highPrice", ticker.high_price)?,
        low_price: parse_price("lowPrice", ticker.low_price)?,
        symbol: ticker.symbol,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_ticker_to_snapshot() {
        let ticker: BinanceTicker24h = serde_json::from_str(
            r#"{"symbol":"BTCUSDT","priceChange":"1200.00","lastPrice":"60000.00000000",
                "prevClosePrice":"58800.00000000","openPrice":"58800.00000000",
                "highPrice":"60500.10000000","lowPrice":"58000.00000000","volume":"1234.5"}"#,
        )
        .unwrap();

        let snapshot = ticker_to_snapshot(ticker).unwrap();
        assert_eq!(snapshot.symbol, "BTCUSDT");
        assert_eq!(snapshot.last_price, Some(dec!(60000)));
        assert_eq!(snapshot.prev_close_price, Some(dec!(58800)));
        assert_eq!(snapshot.high_price, Some(dec!(60500.1)));
        assert_eq!(snapshot.low_price, Some(dec!(58000)));
    }

    #[test]
    fn test_missing_fields_stay_missing() {
        let ticker: BinanceTicker24h =
            serde_json::from_str(r#"{"symbol":"ETHBTC","lastPrice":"0.05"}"#).unwrap();

        let snapshot = ticker_to_snapshot(ticker).unwrap();
        assert_eq!(snapshot.last_price, Some(dec!(0.05)));
        assert_eq!(snapshot.prev_close_price, None);
        assert_eq!(snapshot.open_price, None);
    }

    #[test]
    fn test_bad_price_is_validation_error() {
        let ticker: BinanceTicker24h =
            serde_json::from_str(r#"{"symbol":"BTCUSDT","lastPrice":"n/a"}"#).unwrap();

        let err = ticker_to_snapshot(ticker).unwrap_err();
        assert!(matches!(err, MarketDataError::ValidationFailed { .. }));
    }

    #[test]
    fn test_classify_error() {
        let err = classify_error("FOOUSDT", 400, r#"{"code":-1121,"msg":"Invalid symbol."}"#);
        assert!(matches!(err, MarketDataError::SymbolNotFound(ref s) if s == "FOOUSDT"));

        let err = classify_error("BTCUSDT", 451, r#"{"code":0,"msg":"Service unavailable from a restricted location"}"#);
        assert_eq!(
            err.to_string(),
            "Provider error: BINANCE - HTTP 451: Service unavailable from a restricted location"
        );

        let err = classify_error("BTCUSDT", 502, "<html>Bad Gateway</html>");
        assert_eq!(err.to_string(), "Provider error: BINANCE - HTTP 502");
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let provider = BinanceProvider::with_base_url("http://localhost:9000/");
        assert_eq!(provider.base_url, "http://localhost:9000");
    }
}
