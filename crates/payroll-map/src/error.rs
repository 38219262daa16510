//! Error types for column resolution.

use std::fmt;

use payroll_model::CanonicalField;

/// Errors from column resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// The header list is empty or blank.
    NoHeaders,
    /// Required fields did not resolve to any header.
    MissingRequired(Vec<CanonicalField>),
}

impl fmt::Display for MappingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoHeaders => write!(f, "no columns found in the file"),
            Self::MissingRequired(fields) => {
                let names: Vec<&str> = fields.iter().map(|field| field.key()).collect();
                write!(
                    f,
                    "required columns not detected ({}); check the file format",
                    names.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for MappingError {}
