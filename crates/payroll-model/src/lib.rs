//! Payroll data model.
//!
//! Shared types passed between ingest, column resolution, normalization and
//! export: the canonical field table, the decoded [`RawTable`], resolved
//! [`ColumnMap`]s and the normalized [`ProcessedRecord`].

pub mod fields;
pub mod mapping;
pub mod records;
pub mod table;

pub use fields::{CanonicalField, REQUIRED_FIELDS};
pub use mapping::{ColumnBinding, ColumnMap};
pub use records::{EmployeeProfile, PayrollFigures, PensionRegime, PeriodValue, ProcessedRecord};
pub use table::RawTable;
