//! Payroll export ingestion.
//!
//! Loads a spreadsheet-exported payroll CSV into a [`RawTable`]: UTF-8 only,
//! delimiter sniffed from the header line, blank lines skipped, rows aligned
//! to the header width.
//!
//! ```ignore
//! use std::path::Path;
//! use payroll_ingest::read_payroll_csv;
//!
//! let table = read_payroll_csv(Path::new("planilla_julio.csv"))?;
//! println!("{} columns, {} rows", table.headers.len(), table.len());
//! ```
//!
//! [`RawTable`]: payroll_model::RawTable

mod loader;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use loader::{
    CANDIDATE_DELIMITERS, MAX_CSV_FILE_SIZE, check_file_size, check_file_size_with_limit,
    parse_payroll_csv, read_payroll_csv, sniff_delimiter, validate_encoding,
};
