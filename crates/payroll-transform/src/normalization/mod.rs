//! Scalar normalization functions.
//!
//! Pure functions with no failure mode: malformed input degrades to a
//! documented default instead of an error.

mod days;
mod money;
mod period;

pub use days::{DEFAULT_DAYS_WORKED, parse_day_count};
pub use money::{RawAmount, format_money, parse_money, round_to_cents};
pub use period::{extract_period, extract_period_at, month_from_name};
