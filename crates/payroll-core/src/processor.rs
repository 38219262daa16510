//! Whole-table processing.

use rayon::prelude::*;
use tracing::{info, info_span, warn};

use payroll_map::{ensure_required, resolve_columns};
use payroll_model::{ColumnMap, ProcessedRecord, RawTable};

use crate::error::{ProcessError, Result};
use crate::normalize::normalize_row;
use crate::options::NormalizeOptions;

/// Resolves the table's columns and checks that name and DNI are present.
pub fn prepare_columns(table: &RawTable) -> Result<ColumnMap> {
    if !table.has_headers() {
        warn!("payroll table has no header row");
        return Err(ProcessError::NoHeaderRow);
    }
    let columns = resolve_columns(&table.headers);
    if let Err(err) = ensure_required(&table.headers, &columns) {
        warn!(error = %err, "required payroll columns missing");
        return Err(err.into());
    }
    Ok(columns)
}

/// Normalizes every row of `table`, in order, valid or not.
///
/// Fails only when the header row is missing or the name/DNI columns cannot
/// be resolved; in that case no records are returned.
pub fn process_table(table: &RawTable, options: &NormalizeOptions) -> Result<Vec<ProcessedRecord>> {
    let span = info_span!("process_table", rows = table.len(), parallel = options.parallel);
    let _guard = span.enter();

    let columns = prepare_columns(table)?;
    let reference = options.effective_reference_date();

    let records: Vec<ProcessedRecord> = if options.parallel {
        table
            .rows
            .par_iter()
            .enumerate()
            .map(|(index, row)| normalize_row(row, &columns, index, reference))
            .collect()
    } else {
        table
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| normalize_row(row, &columns, index, reference))
            .collect()
    };

    let invalid = records.iter().filter(|record| !record.is_valid).count();
    if invalid > 0 {
        warn!(invalid, "rows failed validation");
    }
    info!(
        total = records.len(),
        valid = records.len() - invalid,
        resolved_columns = columns.len(),
        "processed payroll table"
    );
    Ok(records)
}
