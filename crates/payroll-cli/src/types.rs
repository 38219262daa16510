use std::path::PathBuf;

use payroll_map::FieldMatch;
use payroll_model::{CanonicalField, ProcessedRecord};
use payroll_report::ExportSummary;

#[derive(Debug)]
pub struct ProcessResult {
    pub source: PathBuf,
    pub records: Vec<ProcessedRecord>,
}

impl ProcessResult {
    pub fn valid_count(&self) -> usize {
        self.records.iter().filter(|record| record.is_valid).count()
    }

    pub fn invalid_count(&self) -> usize {
        self.records.len() - self.valid_count()
    }
}

#[derive(Debug)]
pub struct ColumnReport {
    pub source: PathBuf,
    pub headers: Vec<String>,
    pub matches: Vec<FieldMatch>,
    pub unresolved: Vec<CanonicalField>,
    pub missing_required: Vec<CanonicalField>,
}

#[derive(Debug)]
pub struct ExportResult {
    pub archive: PathBuf,
    pub summary: ExportSummary,
}
