//! Error types for payslip export.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    /// Could not create the archive file.
    #[error("failed to create archive {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing an entry's bytes failed.
    #[error("failed to write {entry}: {source}")]
    Write {
        entry: String,
        #[source]
        source: std::io::Error,
    },

    /// The ZIP encoder rejected an operation.
    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;
