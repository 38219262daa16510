//! Monetary amount parsing for spreadsheet cells.
//!
//! Peruvian exports mix `1.234,56` and `1,234.56` styles, sometimes with an
//! `S/` prefix. Parsing never fails: anything without a sane numeric reading
//! becomes `0.0`.

use std::sync::LazyLock;

use regex::Regex;

static CURRENCY_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)S/\s*").expect("currency prefix pattern"));

static FLOAT_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)").expect("float prefix pattern")
});

/// A cell value handed to [`parse_money`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawAmount<'a> {
    /// Column unresolved or cell absent.
    Missing,
    /// Already numeric; returned unchanged.
    Number(f64),
    /// Free text from the source file.
    Text(&'a str),
}

impl<'a> From<&'a str> for RawAmount<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for RawAmount<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value.as_str())
    }
}

impl<'a> From<Option<&'a str>> for RawAmount<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(Self::Missing, Self::Text)
    }
}

impl From<f64> for RawAmount<'_> {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Parses a monetary cell into an amount.
///
/// Separator rules, applied after dropping the currency marker and every
/// character other than digits, `.`, `,` and `-`:
/// - both `,` and `.` present: the right-most one is the decimal separator;
/// - only `,`: exactly three trailing characters means thousands, else decimal;
/// - only `.`: exactly three trailing characters means thousands, else decimal.
///
/// `"1,234"` therefore reads as one thousand two hundred thirty-four.
pub fn parse_money<'a>(raw: impl Into<RawAmount<'a>>) -> f64 {
    match raw.into() {
        RawAmount::Missing => 0.0,
        RawAmount::Number(value) => value,
        RawAmount::Text(text) if text.is_empty() => 0.0,
        RawAmount::Text(text) => parse_money_text(text),
    }
}

fn parse_money_text(text: &str) -> f64 {
    let without_currency = CURRENCY_PREFIX.replace(text, "");
    let cleaned: String = without_currency
        .trim()
        .chars()
        .filter(|ch| ch.is_ascii_digit() || matches!(ch, '.' | ',' | '-'))
        .collect();

    let normalized = match (cleaned.rfind(','), cleaned.rfind('.')) {
        (None, None) => cleaned,
        (Some(comma), Some(dot)) => {
            if comma > dot {
                cleaned.replace('.', "").replace(',', ".")
            } else {
                cleaned.replace(',', "")
            }
        }
        (Some(comma), None) => {
            if trailing_len(&cleaned, comma) == 3 {
                cleaned.replace(',', "")
            } else {
                cleaned.replace(',', ".")
            }
        }
        (None, Some(dot)) => {
            if trailing_len(&cleaned, dot) == 3 {
                cleaned.replace('.', "")
            } else {
                cleaned
            }
        }
    };

    parse_float_prefix(&normalized).unwrap_or(0.0)
}

/// Characters after the separator at `idx` (the string is ASCII here).
fn trailing_len(value: &str, idx: usize) -> usize {
    value.len() - idx - 1
}

/// Reads the longest leading float, ignoring whatever follows it.
fn parse_float_prefix(value: &str) -> Option<f64> {
    let found = FLOAT_PREFIX.find(value)?;
    found.as_str().parse().ok()
}

/// Rounds an amount to whole cents.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Formats an amount with exactly two decimals.
pub fn format_money(value: f64) -> String {
    format!("{:.2}", round_to_cents(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_separators() {
        assert_eq!(parse_money("1,234.56"), 1234.56);
        assert_eq!(parse_money("1.234,56"), 1234.56);
        assert_eq!(parse_money("12.345.678,9"), 12345678.9);
    }

    #[test]
    fn test_comma_only() {
        assert_eq!(parse_money("S/ 1,400"), 1400.0);
        assert_eq!(parse_money("12,5"), 12.5);
        assert_eq!(parse_money("1,234,567"), 1234567.0);
        assert_eq!(parse_money("0,75"), 0.75);
    }

    #[test]
    fn test_dot_only() {
        assert_eq!(parse_money("1.400"), 1400.0);
        assert_eq!(parse_money("1500.50"), 1500.5);
        assert_eq!(parse_money("0.5"), 0.5);
    }

    #[test]
    fn test_currency_and_noise() {
        assert_eq!(parse_money("s/1500"), 1500.0);
        assert_eq!(parse_money("  S/   2,000.00 "), 2000.0);
        assert_eq!(parse_money("PEN 350"), 350.0);
    }

    #[test]
    fn test_negative() {
        assert_eq!(parse_money("-45,50"), -45.5);
        assert_eq!(parse_money("S/ -1,234.56"), -1234.56);
    }

    #[test]
    fn test_empty_and_missing() {
        assert_eq!(parse_money(""), 0.0);
        assert_eq!(parse_money("   "), 0.0);
        assert_eq!(parse_money(None::<&str>), 0.0);
    }

    #[test]
    fn test_numeric_input_unchanged() {
        assert_eq!(parse_money(12.345), 12.345);
        assert_eq!(parse_money(-3.0), -3.0);
    }

    #[test]
    fn test_garbage_is_zero() {
        assert_eq!(parse_money("abc"), 0.0);
        assert_eq!(parse_money("-"), 0.0);
        assert_eq!(parse_money("N/A"), 0.0);
    }

    #[test]
    fn test_leading_prefix_wins() {
        // "1,23,4" has one trailing digit after the last comma: decimal reading.
        assert_eq!(parse_money("1,23,4"), 1.23);
        assert_eq!(parse_money("10-5"), 10.0);
    }

    #[test]
    fn test_round_and_format() {
        assert_eq!(round_to_cents(10.005_1), 10.01);
        assert_eq!(format_money(1400.0), "1400.00");
        assert_eq!(format_money(0.1 + 0.2), "0.30");
    }
}
