//! Payroll CSV decoding into a [`RawTable`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, warn};

use payroll_model::RawTable;

use crate::error::{IngestError, Result};

use super::delimiter::sniff_delimiter;

/// Maximum file size accepted for a payroll export (100 MB).
pub const MAX_CSV_FILE_SIZE: u64 = 100 * 1024 * 1024;

fn open_error(path: &Path, err: std::io::Error) -> IngestError {
    if err.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: err,
        }
    }
}

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_CSV_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| open_error(path, e))?;
    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }
    Ok(())
}

/// Rejects files that start with a UTF-16 byte-order mark.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| open_error(path, e))?;
    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 2 {
        let encoding = match buffer {
            [0xFF, 0xFE] => Some("UTF-16 LE"),
            [0xFE, 0xFF] => Some("UTF-16 BE"),
            _ => None,
        };
        if let Some(encoding) = encoding {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding,
            });
        }
    }
    Ok(())
}

/// Reads a payroll export from disk.
///
/// Checks size and encoding first, then decodes with [`parse_payroll_csv`].
pub fn read_payroll_csv(path: &Path) -> Result<RawTable> {
    check_file_size(path)?;
    validate_encoding(path)?;

    let bytes = std::fs::read(path).map_err(|e| open_error(path, e))?;
    let text = std::str::from_utf8(&bytes).map_err(|e| IngestError::InvalidUtf8 {
        path: path.to_path_buf(),
        offset: e.valid_up_to(),
    })?;

    let table = parse_payroll_csv(text)?;
    debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.len(),
        "loaded payroll CSV"
    );
    Ok(table)
}

/// Decodes CSV text into headers plus positional rows.
///
/// The first non-blank record is the header row. After it, only empty lines
/// are skipped: a line of bare delimiters is kept as a data row so it is
/// reported and later row indexes keep matching the file. Every data row is
/// padded or truncated to the header width. Text with no records yields an
/// empty table.
pub fn parse_payroll_csv(text: &str) -> Result<RawTable> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let delimiter = sniff_delimiter(text);

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    let mut ragged = 0usize;

    for record in reader.records() {
        let record = record?;
        if record.len() == 1 && record[0].is_empty() {
            continue;
        }
        match &headers {
            None if record.iter().all(|cell| cell.trim().is_empty()) => {}
            None => {
                headers = Some(record.iter().map(|cell| cell.trim().to_string()).collect());
            }
            Some(columns) => {
                let mut row: Vec<String> = record.iter().map(str::to_string).collect();
                if row.len() != columns.len() {
                    ragged += 1;
                    row.resize(columns.len(), String::new());
                }
                rows.push(row);
            }
        }
    }

    if ragged > 0 {
        warn!(rows = ragged, "rows with a different width than the header were adjusted");
    }

    Ok(RawTable::new(headers.unwrap_or_default(), rows))
}
