//! Payroll CSV loading.

mod delimiter;
mod reader;

pub use delimiter::{CANDIDATE_DELIMITERS, sniff_delimiter};
pub use reader::{
    MAX_CSV_FILE_SIZE, check_file_size, check_file_size_with_limit, parse_payroll_csv,
    read_payroll_csv, validate_encoding,
};
