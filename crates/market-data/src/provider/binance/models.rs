//! Binance REST response models.

use serde::Deserialize;

/// Response of `GET /api/v3/ticker/24hr?symbol=...`.
///
/// Binance encodes all prices as decimal strings.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinanceTicker24h {
    pub symbol: String,
    pub last_price: Option<String>,
    pub prev_close_price: Option<String>,
    pub open_price: Option<String>,
    pub high_price: Option<String>,
    pub low_price: Option<String>,
}

/// Error body, e.g. `{"code":-1121,"msg":"Invalid symbol."}`
#[derive(Debug, Deserialize)]
pub struct BinanceErrorBody {
    pub code: i64,
    pub msg: String,
}
