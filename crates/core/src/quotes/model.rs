use log::warn;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A normalized quote for one requested symbol.
///
/// Raw values are in `currency`; converted values are in the target
/// currency and kept at full precision. Rounding is left to the renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub symbol: String,
    pub display_name: String,
    pub currency: String,
    pub price: Option<Decimal>,
    pub previous_close: Option<Decimal>,
    pub open: Option<Decimal>,
    pub day_high: Option<Decimal>,
    pub day_low: Option<Decimal>,
    /// Equities only
    pub market_cap: Option<Decimal>,
    pub change: Option<Decimal>,
    pub change_percent: Option<Decimal>,
    #[serde(flatten)]
    pub converted: ConvertedValues,
    pub conversion_rate: Option<Decimal>,
    /// Provider that produced the quote (YAHOO, BINANCE, ...)
    pub source: String,
}

/// Raw values multiplied by the conversion rate.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertedValues {
    pub converted_price: Option<Decimal>,
    pub converted_previous_close: Option<Decimal>,
    pub converted_open: Option<Decimal>,
    pub converted_day_high: Option<Decimal>,
    pub converted_day_low: Option<Decimal>,
    pub converted_market_cap: Option<Decimal>,
    pub converted_change: Option<Decimal>,
}

impl Quote {
    /// Apply a conversion factor (or its absence) to every convertible field.
    ///
    /// A converted field is set only when both its raw value and the factor
    /// are present; nothing is defaulted to zero.
    pub fn apply_conversion(&mut self, rate: Option<Decimal>) {
        let symbol = &self.symbol;
        let convert = |value: Option<Decimal>| -> Option<Decimal> {
            let (value, rate) = value.zip(rate)?;
            let converted = value.checked_mul(rate);
            if converted.is_none() {
                warn!("Conversion of {} {} at rate {} overflowed", symbol, value, rate);
            }
            converted
        };

        self.conversion_rate = rate;
        self.converted = ConvertedValues {
            converted_price: convert(self.price),
            converted_previous_close: convert(self.previous_close),
            converted_open: convert(self.open),
            converted_day_high: convert(self.day_high),
            converted_day_low: convert(self.day_low),
            converted_market_cap: convert(self.market_cap),
            converted_change: convert(self.change),
        };
    }
}

/// Absolute and percentage change from `previous_close` to `price`.
///
/// Both are `None` unless both inputs are present, the previous close is
/// non-zero and the difference fits in a `Decimal`.
pub fn price_change(
    price: Option<Decimal>,
    previous_close: Option<Decimal>,
) -> (Option<Decimal>, Option<Decimal>) {
    match (price, previous_close) {
        (Some(price), Some(previous_close)) if !previous_close.is_zero() => {
            let Some(change) = price.checked_sub(previous_close) else {
                warn!("Change from {} to {} overflowed", previous_close, price);
                return (None, None);
            };
            let change_percent = change
                .checked_div(previous_close)
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED));
            (Some(change), change_percent)
        }
        _ => (None, None),
    }
}
