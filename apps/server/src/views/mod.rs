//! HTML rendering of the quote page.
//!
//! Values are kept at full precision up to this point and rounded to two
//! decimals here.

mod format;

pub use format::{escape_html, format_amount, format_percent};

use std::fmt::Write;

use quotedesk_core::{Dashboard, Quote};
use quotedesk_core::fx::TARGET_CURRENCY;

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Quotedesk</title>
<style>
body { font-family: sans-serif; margin: 2rem; color: #222; }
form { margin-bottom: 1.5rem; }
input[type=text] { width: 24rem; padding: .4rem; }
.errors { color: #b00020; }
.cards { display: flex; flex-wrap: wrap; gap: 1rem; }
.card { border: 1px solid #ddd; border-radius: 6px; padding: 1rem; min-width: 18rem; }
.card.primary { border-color: #2962ff; }
.up { color: #1b873f; }
.down { color: #c62828; }
table { border-collapse: collapse; }
td, th { padding: .15rem .6rem; text-align: right; }
th:first-child, td:first-child { text-align: left; }
</style>
</head>
<body>
<h1>Quotedesk</h1>
"#;

const PAGE_TAIL: &str = "</body>\n</html>\n";

/// Render the full quote page for `dashboard`, echoing `input` in the form.
pub fn render_page(dashboard: &Dashboard, input: &str) -> String {
    let mut html = String::from(PAGE_HEAD);

    let _ = write!(
        html,
        r#"<form method="post" action="/">
<input type="text" name="company" placeholder="AAPL, RELIANCE.NS, BTCUSDT" value="{}">
<button type="submit">Get quotes</button>
</form>
"#,
        escape_html(input)
    );

    if !dashboard.errors.is_empty() {
        html.push_str("<ul class=\"errors\">\n");
        for error in &dashboard.errors {
            let _ = writeln!(html, "<li>{}</li>", escape_html(error));
        }
        html.push_str("</ul>\n");
    }

    if !dashboard.quotes.is_empty() {
        html.push_str("<div class=\"cards\">\n");
        for (idx, quote) in dashboard.quotes.iter().enumerate() {
            render_card(&mut html, quote, idx == 0);
        }
        html.push_str("</div>\n");
    }

    if let Some(chart) = &dashboard.chart {
        html.push_str("<div class=\"chart\">\n");
        html.push_str(chart);
        html.push_str("\n</div>\n");
    }

    html.push_str(PAGE_TAIL);
    html
}

fn render_card(html: &mut String, quote: &Quote, primary: bool) {
    let class = if primary { "card primary" } else { "card" };
    let trend = match quote.change {
        Some(change) if change.is_sign_negative() && !change.is_zero() => "down",
        Some(_) => "up",
        None => "",
    };
    let converted = &quote.converted;

    let _ = write!(
        html,
        r#"<div class="{class}">
<h2>{name} <small>({symbol})</small></h2>
<p class="{trend}">{price} {currency} &middot; {change} ({change_percent})</p>
<table>
<tr><th></th><th>{currency}</th><th>{target}</th></tr>
"#,
        class = class,
        name = escape_html(&quote.display_name),
        symbol = escape_html(&quote.symbol),
        trend = trend,
        price = format_amount(quote.price),
        currency = escape_html(&quote.currency),
        change = format_amount(quote.change),
        change_percent = format_percent(quote.change_percent),
        target = TARGET_CURRENCY,
    );

    let rows = [
        ("Price", quote.price, converted.converted_price),
        ("Previous close", quote.previous_close, converted.converted_previous_close),
        ("Open", quote.open, converted.converted_open),
        ("Day high", quote.day_high, converted.converted_day_high),
        ("Day low", quote.day_low, converted.converted_day_low),
        ("Market cap", quote.market_cap, converted.converted_market_cap),
        ("Change", quote.change, converted.converted_change),
    ];
    for (label, raw, inr) in rows {
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            label,
            format_amount(raw),
            format_amount(inr)
        );
    }

    let _ = write!(
        html,
        "</table>\n<p><small>Rate to {}: {}</small></p>\n</div>\n",
        TARGET_CURRENCY,
        format_amount(quote.conversion_rate)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotedesk_core::quotes::ConvertedValues;
    use rust_decimal_macros::dec;

    fn aapl() -> Quote {
        let mut quote = Quote {
            symbol: "AAPL".to_string(),
            display_name: "Apple Inc.".to_string(),
            currency: "USD".to_string(),
            price: Some(dec!(150)),
            previous_close: Some(dec!(145)),
            open: None,
            day_high: None,
            day_low: None,
            market_cap: None,
            change: Some(dec!(5)),
            change_percent: Some(dec!(3.448275862068965517241379310)),
            converted: ConvertedValues::default(),
            conversion_rate: None,
            source: "YAHOO".to_string(),
        };
        quote.apply_conversion(Some(dec!(83.0)));
        quote
    }

    #[test]
    fn test_empty_page_has_form_only() {
        let html = render_page(&Dashboard::default(), "");
        assert!(html.contains("name=\"company\""));
        assert!(!html.contains("class=\"errors\""));
        assert!(!html.contains("class=\"cards\""));
        assert!(!html.contains("class=\"chart\""));
    }

    #[test]
    fn test_quote_card_rounds_values() {
        let quote = aapl();
        let dashboard = Dashboard {
            quotes: vec![quote.clone()],
            primary_quote: Some(quote),
            errors: vec![],
            chart: Some("<svg></svg>".to_string()),
        };

        let html = render_page(&dashboard, "aapl");

        assert!(html.contains("Apple Inc."));
        assert!(html.contains("12450.00"));
        assert!(html.contains("3.45%"));
        assert!(html.contains("card primary"));
        assert!(html.contains("<svg></svg>"));
        assert!(html.contains("value=\"aapl\""));
    }

    #[test]
    fn test_errors_and_input_are_escaped() {
        let dashboard = Dashboard {
            errors: vec!["Data not found for symbol: <SCRIPT>".to_string()],
            ..Default::default()
        };

        let html = render_page(&dashboard, "\"><script>");

        assert!(html.contains("Data not found for symbol: &lt;SCRIPT&gt;"));
        assert!(html.contains("value=\"&quot;&gt;&lt;script&gt;\""));
        assert!(!html.contains("<script>"));
    }
}
