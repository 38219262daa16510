//! Pipeline stages shared by the subcommands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::Local;
use tracing::{info, info_span, warn};

use payroll_core::{NormalizeOptions, process_table};
use payroll_ingest::read_payroll_csv;
use payroll_map::ColumnResolver;
use payroll_model::{ColumnMap, ProcessedRecord};
use payroll_report::{PayslipTemplate, default_archive_name, write_archive_file};

use crate::logging::redact_value;
use crate::types::{ColumnReport, ExportResult, ProcessResult};

/// Loads and normalizes a payroll CSV.
pub fn process_file(path: &Path, options: &NormalizeOptions) -> Result<ProcessResult> {
    let span = info_span!("process_file", path = %path.display());
    let _guard = span.enter();

    let table = read_payroll_csv(path).with_context(|| format!("read {}", path.display()))?;
    let records = process_table(&table, options)
        .with_context(|| format!("process {}", path.display()))?;
    log_invalid_rows(&records);

    Ok(ProcessResult {
        source: path.to_path_buf(),
        records,
    })
}

fn log_invalid_rows(records: &[ProcessedRecord]) {
    for record in records.iter().filter(|record| !record.is_valid) {
        warn!(
            row = record.row_index,
            name = redact_value(&record.employee.full_name),
            dni = redact_value(&record.employee.dni),
            errors = ?record.errors,
            "invalid payroll row"
        );
    }
}

/// Reports how each header of a payroll CSV resolves.
pub fn inspect_columns(path: &Path) -> Result<ColumnReport> {
    let table = read_payroll_csv(path).with_context(|| format!("read {}", path.display()))?;
    let matches = ColumnResolver::new().matches(&table.headers);

    let mut map = ColumnMap::new();
    for hit in &matches {
        map.bind(hit.field, hit.header.clone(), hit.index);
    }

    Ok(ColumnReport {
        source: path.to_path_buf(),
        unresolved: map.unresolved(),
        missing_required: map.missing_required(),
        headers: table.headers,
        matches,
    })
}

/// Archive path: `output` when given, else the dated default next to the CSV.
pub fn archive_path(source: &Path, output: Option<&Path>) -> PathBuf {
    match output {
        Some(path) => path.to_path_buf(),
        None => {
            let name = default_archive_name(Local::now().date_naive());
            source
                .parent()
                .map_or_else(|| PathBuf::from(&name), |dir| dir.join(&name))
        }
    }
}

/// Writes the payslip archive for the valid records of `result`.
pub fn export_payslips(
    result: &ProcessResult,
    output: Option<&Path>,
    template: &PayslipTemplate,
) -> Result<ExportResult> {
    if result.valid_count() == 0 {
        bail!(
            "no valid records to export from {} ({} rows, all invalid)",
            result.source.display(),
            result.records.len()
        );
    }

    let archive = archive_path(&result.source, output);
    let summary = write_archive_file(&result.records, &archive, template)
        .with_context(|| format!("write {}", archive.display()))?;
    info!(
        archive = %archive.display(),
        payslips = summary.written.len(),
        "payslip archive written"
    );
    Ok(ExportResult { archive, summary })
}
