//! Batch-level failures.

use payroll_map::MappingError;
use payroll_model::CanonicalField;
use thiserror::Error;

/// A condition that stops the whole table from being processed.
///
/// Row-level problems never surface here; they are collected on each
/// [`ProcessedRecord`](payroll_model::ProcessedRecord) instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ProcessError {
    /// The file has no usable header row.
    #[error("no header row found in the file")]
    NoHeaderRow,

    /// Name or national ID columns could not be identified.
    #[error(
        "required columns not detected ({}); check the file format",
        field_list(.fields)
    )]
    MissingRequiredColumns { fields: Vec<CanonicalField> },
}

fn field_list(fields: &[CanonicalField]) -> String {
    fields
        .iter()
        .map(|field| field.key())
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<MappingError> for ProcessError {
    fn from(err: MappingError) -> Self {
        match err {
            MappingError::NoHeaders => Self::NoHeaderRow,
            MappingError::MissingRequired(fields) => Self::MissingRequiredColumns { fields },
        }
    }
}

/// Result type for batch processing.
pub type Result<T> = std::result::Result<T, ProcessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProcessError::MissingRequiredColumns {
            fields: vec![CanonicalField::Dni],
        };
        assert_eq!(
            err.to_string(),
            "required columns not detected (dni); check the file format"
        );
        assert_eq!(
            ProcessError::NoHeaderRow.to_string(),
            "no header row found in the file"
        );
    }

    #[test]
    fn test_from_mapping_error() {
        let err: ProcessError = MappingError::NoHeaders.into();
        assert_eq!(err, ProcessError::NoHeaderRow);
        let err: ProcessError =
            MappingError::MissingRequired(vec![CanonicalField::FullName]).into();
        assert!(matches!(err, ProcessError::MissingRequiredColumns { .. }));
    }
}
