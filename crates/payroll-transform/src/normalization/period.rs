//! Payroll period extraction from free text.
//!
//! Accepted forms, tried in this order:
//! 1. Spanish month name followed by a four-digit year (`JULIO 2025`,
//!    `mes de setiembre 2024`);
//! 2. numeric `MM/YYYY`, `MM-YYYY`, `YYYY/MM` or `YYYY-MM`.
//!
//! Anything else yields the reference date's year and month flagged invalid.

use std::sync::LazyLock;

use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;

use payroll_model::PeriodValue;

const MIN_YEAR: i32 = 1900;
const MAX_YEAR: i32 = 2100;

/// Spanish month names, including the Peruvian spelling `SETIEMBRE`.
const MONTH_NAMES: [(&str, u32); 13] = [
    ("ENERO", 1),
    ("FEBRERO", 2),
    ("MARZO", 3),
    ("ABRIL", 4),
    ("MAYO", 5),
    ("JUNIO", 6),
    ("JULIO", 7),
    ("AGOSTO", 8),
    ("SEPTIEMBRE", 9),
    ("SETIEMBRE", 9),
    ("OCTUBRE", 10),
    ("NOVIEMBRE", 11),
    ("DICIEMBRE", 12),
];

static TEXT_PERIOD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]+)\s+([0-9]{4})").expect("text period pattern"));

static NUMERIC_PERIOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{1,2})[/\-]([0-9]{4})|([0-9]{4})[/\-]([0-9]{1,2})")
        .expect("numeric period pattern")
});

/// Resolves a Spanish month name (any case) to its number.
pub fn month_from_name(name: &str) -> Option<u32> {
    let upper = name.trim().to_uppercase();
    MONTH_NAMES
        .iter()
        .find(|(candidate, _)| *candidate == upper)
        .map(|(_, month)| *month)
}

/// Extracts the payroll period, falling back to today's local date.
pub fn extract_period(text: &str) -> PeriodValue {
    extract_period_at(text, Local::now().date_naive())
}

/// Extracts the payroll period, falling back to `reference` when the text has
/// no recognizable period.
pub fn extract_period_at(text: &str, reference: NaiveDate) -> PeriodValue {
    let normalized = text.trim().to_uppercase();

    if let Some(period) = match_text_period(&normalized) {
        return period;
    }
    if let Some(period) = match_numeric_period(&normalized) {
        return period;
    }

    PeriodValue::fallback(reference.year(), reference.month())
}

fn match_text_period(normalized: &str) -> Option<PeriodValue> {
    let caps = TEXT_PERIOD.captures(normalized)?;
    let month = month_from_name(&caps[1])?;
    let year: i32 = caps[2].parse().ok()?;
    in_range(year, month).then(|| PeriodValue::valid(year, month))
}

fn match_numeric_period(normalized: &str) -> Option<PeriodValue> {
    let caps = NUMERIC_PERIOD.captures(normalized)?;
    let (month, year) = match (caps.get(1), caps.get(2)) {
        (Some(month), Some(year)) => (month.as_str(), year.as_str()),
        _ => (caps.get(4)?.as_str(), caps.get(3)?.as_str()),
    };
    let month: u32 = month.parse().ok()?;
    let year: i32 = year.parse().ok()?;
    in_range(year, month).then(|| PeriodValue::valid(year, month))
}

fn in_range(year: i32, month: u32) -> bool {
    (1..=12).contains(&month) && (MIN_YEAR..=MAX_YEAR).contains(&year)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    #[test]
    fn test_month_names() {
        assert_eq!(month_from_name("julio"), Some(7));
        assert_eq!(month_from_name("SETIEMBRE"), Some(9));
        assert_eq!(month_from_name("Septiembre"), Some(9));
        assert_eq!(month_from_name("JULY"), None);
    }

    #[test]
    fn test_text_period() {
        assert_eq!(
            extract_period_at("JULIO 2025", reference()),
            PeriodValue::valid(2025, 7)
        );
        assert_eq!(
            extract_period_at("  diciembre   2024 ", reference()),
            PeriodValue::valid(2024, 12)
        );
        assert_eq!(
            extract_period_at("PLANILLA MES DE SETIEMBRE 2024", reference()),
            PeriodValue::valid(2024, 9)
        );
    }

    #[test]
    fn test_numeric_period() {
        assert_eq!(
            extract_period_at("05/2024", reference()),
            PeriodValue::valid(2024, 5)
        );
        assert_eq!(
            extract_period_at("7-2025", reference()),
            PeriodValue::valid(2025, 7)
        );
        assert_eq!(
            extract_period_at("2024-05", reference()),
            PeriodValue::valid(2024, 5)
        );
        assert_eq!(
            extract_period_at("2024/12", reference()),
            PeriodValue::valid(2024, 12)
        );
    }

    #[test]
    fn test_out_of_range_falls_back() {
        assert_eq!(
            extract_period_at("13/2024", reference()),
            PeriodValue::fallback(2026, 3)
        );
        assert_eq!(
            extract_period_at("JULIO 1850", reference()),
            PeriodValue::fallback(2026, 3)
        );
    }

    #[test]
    fn test_unknown_month_name_tries_numeric() {
        assert_eq!(
            extract_period_at("JULY 2025", reference()),
            PeriodValue::fallback(2026, 3)
        );
        assert_eq!(
            extract_period_at("PERIODO 2025-07", reference()),
            PeriodValue::valid(2025, 7)
        );
    }

    #[test]
    fn test_garbage_and_empty() {
        assert_eq!(
            extract_period_at("garbage", reference()),
            PeriodValue::fallback(2026, 3)
        );
        assert_eq!(extract_period_at("", reference()), PeriodValue::fallback(2026, 3));
    }

    #[test]
    fn test_default_reference_is_today() {
        let today = Local::now().date_naive();
        let period = extract_period("garbage");
        assert!(!period.is_valid);
        assert_eq!(period.year, today.year());
        assert_eq!(period.month, today.month());
    }
}
