//! ZIP bundling of valid payslips.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, info, warn};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use payroll_model::ProcessedRecord;

use crate::error::{ExportError, Result};
use crate::render::{PayslipTemplate, render_payslip_with};

/// Folder inside the archive holding every payslip.
pub const ARCHIVE_FOLDER: &str = "Boletas";

/// Outcome of an export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// Entry names written, in record order.
    pub written: Vec<String>,
    /// Invalid records left out.
    pub skipped: usize,
}

/// `Boleta_{dni}_{period}.txt`, with `/` in the period replaced by `-`.
pub fn payslip_file_name(record: &ProcessedRecord) -> String {
    format!(
        "Boleta_{}_{}.txt",
        record.employee.dni,
        record.employee.period_string.replace('/', "-")
    )
}

/// `Boletas_Pago_{YYYY-MM-DD}.zip`.
pub fn default_archive_name(date: NaiveDate) -> String {
    format!("Boletas_Pago_{}.zip", date.format("%Y-%m-%d"))
}

/// Writes one payslip per valid record into a ZIP archive.
///
/// Invalid records are skipped and counted. When two records map to the same
/// entry name the later one gets its row index appended.
pub fn export_archive<W: Write + Seek>(
    records: &[ProcessedRecord],
    writer: W,
    template: &PayslipTemplate,
) -> Result<ExportSummary> {
    let mut zip = ZipWriter::new(writer);
    let options = SimpleFileOptions::default();
    let mut summary = ExportSummary::default();
    let mut taken = BTreeSet::new();

    for record in records {
        if !record.is_valid {
            summary.skipped += 1;
            continue;
        }

        let name = unique_entry_name(&mut taken, record);

        zip.start_file(name.as_str(), options)?;
        zip.write_all(render_payslip_with(record, template).as_bytes())
            .map_err(|source| ExportError::Write {
                entry: name.clone(),
                source,
            })?;
        debug!(entry = %name, "wrote payslip");
        summary.written.push(name);
    }

    zip.finish()?;
    info!(
        written = summary.written.len(),
        skipped = summary.skipped,
        "payslip archive complete"
    );
    Ok(summary)
}

/// Entry name for `record`, suffixed with its row index (and then a counter)
/// until it no longer collides with an earlier entry.
fn unique_entry_name(taken: &mut BTreeSet<String>, record: &ProcessedRecord) -> String {
    let name = format!("{ARCHIVE_FOLDER}/{}", payslip_file_name(record));
    if taken.insert(name.clone()) {
        return name;
    }

    let stem = name.trim_end_matches(".txt");
    let mut candidate = format!("{stem}_{}.txt", record.row_index);
    let mut attempt = 2usize;
    while !taken.insert(candidate.clone()) {
        candidate = format!("{stem}_{}_{attempt}.txt", record.row_index);
        attempt += 1;
    }
    warn!(entry = %candidate, "duplicate payslip name, row index appended");
    candidate
}

/// Creates `path` and exports into it.
pub fn write_archive_file(
    records: &[ProcessedRecord],
    path: &Path,
    template: &PayslipTemplate,
) -> Result<ExportSummary> {
    let file = File::create(path).map_err(|source| ExportError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    export_archive(records, file, template)
}
