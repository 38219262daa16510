//! Column resolution for payroll spreadsheets.
//!
//! Maps the free-form headers of an exported payroll sheet onto the fixed
//! [`CanonicalField`] set. Matching is accent, case and whitespace
//! insensitive, exact before substring, and deterministic: the same header
//! row always produces the same [`ColumnMap`].
//!
//! [`CanonicalField`]: payroll_model::CanonicalField
//! [`ColumnMap`]: payroll_model::ColumnMap

mod engine;
mod error;
mod utils;

pub use engine::{
    ColumnResolver, FieldMatch, FieldVariants, MatchKind, default_variant_table, ensure_required,
    resolve_columns,
};
pub use error::MappingError;
pub use utils::fold_header;
