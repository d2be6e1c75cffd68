use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Descriptive and price fields for an equity, FX or index instrument.
///
/// Every field is optional: providers routinely omit values for thinly
/// traded or delisted instruments and the caller decides what is usable.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquitySnapshot {
    /// Symbol as reported back by the provider
    pub symbol: Option<String>,
    pub long_name: Option<String>,
    pub short_name: Option<String>,
    pub currency: Option<String>,
    pub current_price: Option<Decimal>,
    pub previous_close: Option<Decimal>,
    pub open: Option<Decimal>,
    pub day_high: Option<Decimal>,
    pub day_low: Option<Decimal>,
    pub market_cap: Option<Decimal>,
}

impl EquitySnapshot {
    /// Long name, else short name. Blank names count as missing.
    pub fn display_name(&self) -> Option<&str> {
        [self.long_name.as_deref(), self.short_name.as_deref()]
            .into_iter()
            .flatten()
            .find(|n| !n.trim().is_empty())
    }

    /// True when the provider returned at least one usable name.
    pub fn has_name(&self) -> bool {
        self.display_name().is_some()
    }
}

/// 24h ticker snapshot for a digital-asset trading pair.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerSnapshot {
    /// Trading pair, e.g. `BTCUSDT`
    pub symbol: String,
    pub last_price: Option<Decimal>,
    pub prev_close_price: Option<Decimal>,
    pub open_price: Option<Decimal>,
    pub high_price: Option<Decimal>,
    pub low_price: Option<Decimal>,
}
