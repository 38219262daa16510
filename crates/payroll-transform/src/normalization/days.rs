//! Attendance counters (days worked, vacation days, absences).

/// Days worked assumed when the cell is missing or not a number.
pub const DEFAULT_DAYS_WORKED: i64 = 30;

/// Parses a day-count cell, reading only its leading integer.
///
/// Leading whitespace and a sign are accepted and anything after the digits
/// is ignored, so `"28 días"` is 28 and `"15.5"` is 15. A cell with no leading
/// digits (or an unresolved column) yields `default`.
///
/// An explicit `"0"` is kept as 0, never replaced by `default`.
pub fn parse_day_count(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(parse_leading_int).unwrap_or(default)
}

fn parse_leading_int(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
