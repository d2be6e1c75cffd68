//! Property-based tests for quote conversion and symbol routing.
//!
//! These tests verify that universal properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use proptest::prelude::*;
use quotedesk_core::parse_symbols;
use quotedesk_core::quotes::{
    constants::DIGITAL_ASSET_QUOTE_SUFFIXES, price_change, to_trading_pair, ConvertedValues,
    Quote, SymbolRoute,
};
use rust_decimal::Decimal;

// =============================================================================
// Generators
// =============================================================================

/// Generates a non-negative decimal with up to 4 fractional digits.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000_000, 0u32..=4).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

/// Generates a positive conversion rate.
fn arb_rate() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000, 0u32..=4).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

fn arb_quote() -> impl Strategy<Value = Quote> {
    (
        prop::option::of(arb_amount()),
        prop::option::of(arb_amount()),
        prop::option::of(arb_amount()),
        prop::option::of(arb_amount()),
        prop::option::of(arb_amount()),
        prop::option::of(arb_amount()),
    )
        .prop_map(|(price, previous_close, open, day_high, day_low, market_cap)| {
            let (change, change_percent) = price_change(price, previous_close);
            Quote {
                symbol: "PROP".to_string(),
                display_name: "Prop".to_string(),
                currency: "USD".to_string(),
                price,
                previous_close,
                open,
                day_high,
                day_low,
                market_cap,
                change,
                change_percent,
                converted: ConvertedValues::default(),
                conversion_rate: None,
                source: "TEST".to_string(),
            }
        })
}

// =============================================================================
// Conversion
// =============================================================================

proptest! {
    /// A converted field is present iff its raw field and the rate are present.
    #[test]
    fn prop_converted_present_iff_raw_and_rate(
        mut quote in arb_quote(),
        rate in prop::option::of(arb_rate()),
    ) {
        quote.apply_conversion(rate);
        let c = &quote.converted;
        let pairs = [
            (quote.price, c.converted_price),
            (quote.previous_close, c.converted_previous_close),
            (quote.open, c.converted_open),
            (quote.day_high, c.converted_day_high),
            (quote.day_low, c.converted_day_low),
            (quote.market_cap, c.converted_market_cap),
            (quote.change, c.converted_change),
        ];
        for (raw, converted) in pairs {
            prop_assert_eq!(converted.is_some(), raw.is_some() && rate.is_some());
            if let (Some(raw), Some(rate), Some(converted)) = (raw, rate, converted) {
                prop_assert_eq!(converted, raw * rate);
            }
        }
        prop_assert_eq!(quote.conversion_rate, rate);
    }

    /// Identity conversion leaves every value unchanged.
    #[test]
    fn prop_identity_rate_preserves_values(mut quote in arb_quote()) {
        quote.apply_conversion(Some(Decimal::ONE));
        prop_assert_eq!(quote.converted.converted_price, quote.price);
        prop_assert_eq!(quote.converted.converted_previous_close, quote.previous_close);
        prop_assert_eq!(quote.converted.converted_market_cap, quote.market_cap);
    }

    /// Change fields exist only with a price and a non-zero previous close.
    #[test]
    fn prop_change_requires_nonzero_previous_close(
        price in prop::option::of(arb_amount()),
        previous_close in prop::option::of(arb_amount()),
    ) {
        let (change, change_percent) = price_change(price, previous_close);
        let expected = matches!((price, previous_close), (Some(_), Some(p)) if !p.is_zero());
        prop_assert_eq!(change.is_some(), expected);
        prop_assert_eq!(change_percent.is_some(), expected);
        if let (Some(change), Some(price), Some(prev)) = (change, price, previous_close) {
            prop_assert_eq!(change, price - prev);
        }
    }
}

// =============================================================================
// Routing
// =============================================================================

proptest! {
    /// Symbols carrying a quote-asset suffix always take the digital-asset path
    /// and are passed through unchanged as trading pairs.
    #[test]
    fn prop_suffixed_symbols_route_to_digital_asset(
        base in "[A-Z]{1,8}",
        suffix_idx in 0usize..DIGITAL_ASSET_QUOTE_SUFFIXES.len(),
    ) {
        let symbol = format!("{}{}", base, DIGITAL_ASSET_QUOTE_SUFFIXES[suffix_idx]);
        prop_assert_eq!(SymbolRoute::classify(&symbol), SymbolRoute::DigitalAsset);
        prop_assert_eq!(to_trading_pair(&symbol), symbol);
    }

    /// Short symbols take the digital-asset path.
    #[test]
    fn prop_short_symbols_route_to_digital_asset(symbol in "[A-Z0-9.]{1,5}") {
        prop_assert_eq!(SymbolRoute::classify(&symbol), SymbolRoute::DigitalAsset);
    }

    /// Parsed symbols are trimmed, upper-cased and never empty.
    #[test]
    fn prop_parse_symbols_normalizes(raw in "[a-zA-Z ,.]{0,40}") {
        for symbol in parse_symbols(Some(&raw)) {
            prop_assert!(!symbol.is_empty());
            prop_assert_eq!(symbol.trim(), symbol.as_str());
            prop_assert_eq!(symbol.to_uppercase(), symbol.clone());
            prop_assert!(!symbol.contains(','));
        }
    }
}
