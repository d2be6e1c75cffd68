use chrono::Duration;
use plotters::prelude::*;
use quotedesk_market_data::DailyBar;
use rust_decimal::prelude::ToPrimitive;

use crate::errors::{Error, Result};

const GAIN_COLOR: RGBColor = RGBColor(38, 166, 91);
const LOSS_COLOR: RGBColor = RGBColor(214, 69, 65);

/// Render daily bars as a standalone candlestick `<svg>` fragment.
pub fn render_candlestick_svg(
    symbol: &str,
    bars: &[DailyBar],
    width: u32,
    height: u32,
) -> Result<String> {
    if bars.is_empty() {
        return Err(Error::EmptyHistory(symbol.to_string()));
    }

    let candles: Vec<_> = bars
        .iter()
        .filter_map(|bar| {
            Some((
                bar.timestamp,
                bar.open.to_f64()?,
                bar.high.to_f64()?,
                bar.low.to_f64()?,
                bar.close.to_f64()?,
            ))
        })
        .collect();

    let (Some(first), Some(last)) = (candles.first(), candles.last()) else {
        return Err(Error::EmptyHistory(symbol.to_string()));
    };

    let x_min = first.0 - Duration::hours(12);
    let x_max = last.0 + Duration::hours(12);

    let min_price = candles.iter().map(|c| c.3).fold(f64::INFINITY, f64::min);
    let max_price = candles.iter().map(|c| c.2).fold(f64::NEG_INFINITY, f64::max);
    let padding = (max_price - min_price).max(1e-8) * 0.05;
    let y_min = (min_price - padding).max(0.0);
    let y_max = max_price + padding;

    let candle_width = ((width as usize / candles.len().max(1)) as u32 / 2).clamp(1, 12);

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(format!("{} - last month", symbol), ("sans-serif", 20).into_font())
            .margin(10)
            .x_label_area_size(30)
            .y_label_area_size(60)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(chart_error)?;

        chart
            .configure_mesh()
            .light_line_style(WHITE)
            .x_labels(8)
            .x_label_formatter(&|d| d.format("%b %d").to_string())
            .y_label_formatter(&|y| format!("{:.2}", y))
            .draw()
            .map_err(chart_error)?;

        chart
            .draw_series(candles.iter().map(|&(x, open, high, low, close)| {
                CandleStick::new(
                    x,
                    open,
                    high,
                    low,
                    close,
                    GAIN_COLOR.filled(),
                    LOSS_COLOR.filled(),
                    candle_width,
                )
            }))
            .map_err(chart_error)?;

        root.present().map_err(chart_error)?;
    }

    Ok(svg)
}

fn chart_error<E: std::fmt::Display>(e: E) -> Error {
    Error::Chart(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn bar(day: u32, open: rust_decimal::Decimal, close: rust_decimal::Decimal) -> DailyBar {
        DailyBar {
            timestamp: Utc.with_ymd_and_hms(2024, 5, day, 0, 0, 0).unwrap(),
            open,
            high: open.max(close) + dec!(1),
            low: open.min(close) - dec!(1),
            close,
        }
    }

    #[test]
    fn test_renders_svg_fragment() {
        let bars = vec![
            bar(1, dec!(100), dec!(102)),
            bar(2, dec!(102), dec!(99)),
            bar(3, dec!(99), dec!(104.5)),
        ];

        let svg = render_candlestick_svg("INFY.NS", &bars, 600, 300).unwrap();

        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
        assert!(svg.contains("INFY.NS - last month"));
    }

    #[test]
    fn test_single_bar_renders() {
        let svg = render_candlestick_svg("X", &[bar(1, dec!(5), dec!(5))], 300, 200).unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn test_empty_bars_is_error() {
        let err = render_candlestick_svg("X", &[], 300, 200).unwrap_err();
        assert!(matches!(err, Error::EmptyHistory(s) if s == "X"));
    }
}
