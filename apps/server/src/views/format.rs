use rust_decimal::{Decimal, RoundingStrategy};

const MISSING: &str = "N/A";

/// Two-decimal rendering of an optional amount.
pub fn format_amount(value: Option<Decimal>) -> String {
    match value {
        Some(value) => format!("{:.2}", round2(value)),
        None => MISSING.to_string(),
    }
}

pub fn format_percent(value: Option<Decimal>) -> String {
    match value {
        Some(value) => format!("{:.2}%", round2(value)),
        None => MISSING.to_string(),
    }
}

fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(Some(dec!(12450))), "12450.00");
        assert_eq!(format_amount(Some(dec!(2500.555))), "2500.56");
        assert_eq!(format_amount(None), "N/A");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(Some(dec!(3.4482758))), "3.45%");
        assert_eq!(format_percent(None), "N/A");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("A&B <c> \"d\" 'e'"), "A&amp;B &lt;c&gt; &quot;d&quot; &#39;e&#39;");
    }
}
