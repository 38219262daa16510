//! Payroll batch processing.
//!
//! Drives a decoded [`RawTable`] through column resolution and per-row
//! normalization:
//!
//! - [`process_table`] is the batch entry point; it fails only on a missing
//!   header row or missing name/DNI columns.
//! - [`normalize_row`] builds one [`ProcessedRecord`], collecting row errors
//!   rather than failing.
//! - [`classify_regime`] decides between SNP and SPP.
//! - [`PayslipBreakdown`] itemizes a record into payslip lines and totals.
//!
//! [`RawTable`]: payroll_model::RawTable
//! [`ProcessedRecord`]: payroll_model::ProcessedRecord

pub mod error;
pub mod normalize;
pub mod options;
pub mod payslip;
pub mod pension;
pub mod processor;

pub use error::{ProcessError, Result};
pub use normalize::{
    ERR_INVALID_PERIOD, ERR_MISSING_DNI, ERR_MISSING_NAME, ERR_MISSING_PERIOD, normalize_row,
};
pub use options::NormalizeOptions;
pub use payslip::{PayslipBreakdown, PayslipLine};
pub use pension::{AFP_BRANDS, classify_regime};
pub use processor::{prepare_columns, process_table};
