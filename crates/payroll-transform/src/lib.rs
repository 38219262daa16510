//! Payroll cell normalization.
//!
//! Turns raw spreadsheet text into typed values:
//! - **Money**: `1.234,56`, `1,234.56`, `S/ 1,400` and friends to `f64`
//! - **Periods**: `JULIO 2025`, `05/2024`, `2024-05` to a [`PeriodValue`]
//! - **Day counts**: leading-integer parsing with per-field defaults
//!
//! [`PeriodValue`]: payroll_model::PeriodValue

pub mod normalization;

pub use normalization::{
    DEFAULT_DAYS_WORKED, RawAmount, extract_period, extract_period_at, format_money,
    month_from_name, parse_day_count, parse_money, round_to_cents,
};
