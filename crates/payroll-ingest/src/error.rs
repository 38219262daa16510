//! Error types for payroll CSV ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a payroll export.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the size limit.
    #[error("file {path} is too large ({size} bytes, limit {max_size} bytes)")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    // === Encoding Errors ===
    /// File starts with a byte-order mark of an encoding other than UTF-8.
    #[error("unsupported encoding {encoding} in {path}; save the file as UTF-8")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// File is not valid UTF-8.
    #[error("file {path} is not valid UTF-8 (byte offset {offset})")]
    InvalidUtf8 { path: PathBuf, offset: usize },

    // === CSV Parsing Errors ===
    /// The CSV decoder rejected the input.
    #[error("failed to parse CSV at line {line}: {message}")]
    CsvParse { line: u64, message: String },
}

impl From<csv::Error> for IngestError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map_or(0, csv::Position::line);
        Self::CsvParse {
            line,
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/tmp/planilla.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /tmp/planilla.csv");

        let err = IngestError::UnsupportedEncoding {
            path: PathBuf::from("planilla.csv"),
            encoding: "UTF-16 LE",
        };
        assert_eq!(
            err.to_string(),
            "unsupported encoding UTF-16 LE in planilla.csv; save the file as UTF-8"
        );
    }
}
