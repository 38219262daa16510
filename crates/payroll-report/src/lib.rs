//! Payslip output.
//!
//! - [`render_payslip`]: fixed-layout plain-text payslip for one record
//! - [`export_archive`]: ZIP of payslips for every valid record
//! - [`payslip_file_name`] / [`default_archive_name`]: deterministic names

mod archive;
mod error;
mod render;

pub use archive::{
    ARCHIVE_FOLDER, ExportSummary, default_archive_name, export_archive, payslip_file_name,
    write_archive_file,
};
pub use error::{ExportError, Result};
pub use render::{PayslipTemplate, render_payslip, render_payslip_with};
