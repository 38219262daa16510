//! Exact-then-substring column resolution.
//!
//! For every canonical field (in declaration order) and every accepted variant
//! (in priority order), the resolver first looks for a header equal to the
//! variant, then for the first header containing it. The first hit binds the
//! field and ends the search for that field.
//!
//! A header may end up backing several fields: a substring variant such as
//! `HORAS EXTRAS` also matches `HORAS EXTRAS 25%`. That overlap is kept as-is.

use payroll_model::{CanonicalField, ColumnMap};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::MappingError;
use crate::utils::fold_header;

/// One row of a variant table: a field and its accepted header spellings.
pub type FieldVariants<'a> = (CanonicalField, &'a [&'a str]);

/// The built-in variant table, in resolution order.
pub fn default_variant_table() -> Vec<FieldVariants<'static>> {
    CanonicalField::ALL
        .iter()
        .map(|field| (*field, field.variants()))
        .collect()
}

/// How a header was matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchKind {
    /// Folded header equals the folded variant.
    Exact,
    /// Folded header contains the folded variant.
    Contains,
}

/// A resolved field with the variant and header that bound it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMatch {
    pub field: CanonicalField,
    pub header: String,
    pub index: usize,
    pub variant: String,
    pub kind: MatchKind,
}

/// Resolves headers against a variant table.
#[derive(Debug, Clone)]
pub struct ColumnResolver<'a> {
    table: Vec<FieldVariants<'a>>,
}

impl ColumnResolver<'static> {
    /// Resolver over the built-in payroll variant table.
    pub fn new() -> Self {
        Self {
            table: default_variant_table(),
        }
    }
}

impl Default for ColumnResolver<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> ColumnResolver<'a> {
    /// Resolver over a caller-provided table; row order is resolution order.
    pub fn with_table(table: Vec<FieldVariants<'a>>) -> Self {
        Self { table }
    }

    /// Finds the binding for every field that matches, in table order.
    pub fn matches(&self, headers: &[String]) -> Vec<FieldMatch> {
        let folded: Vec<String> = headers.iter().map(|h| fold_header(h)).collect();
        let mut found = Vec::new();
        for (field, variants) in &self.table {
            if let Some(hit) = match_field(*field, variants, headers, &folded) {
                debug!(
                    field = %hit.field,
                    header = %hit.header,
                    variant = %hit.variant,
                    kind = ?hit.kind,
                    "resolved column"
                );
                found.push(hit);
            }
        }
        found
    }

    /// Builds the column map for a header row.
    pub fn resolve(&self, headers: &[String]) -> ColumnMap {
        let mut map = ColumnMap::new();
        for hit in self.matches(headers) {
            map.bind(hit.field, hit.header, hit.index);
        }
        map
    }
}

fn match_field(
    field: CanonicalField,
    variants: &[&str],
    headers: &[String],
    folded: &[String],
) -> Option<FieldMatch> {
    for variant in variants {
        let needle = fold_header(variant);
        if needle.is_empty() {
            continue;
        }
        let hit = folded
            .iter()
            .position(|h| *h == needle)
            .map(|idx| (idx, MatchKind::Exact))
            .or_else(|| {
                folded
                    .iter()
                    .position(|h| h.contains(&needle))
                    .map(|idx| (idx, MatchKind::Contains))
            });
        if let Some((index, kind)) = hit {
            return Some(FieldMatch {
                field,
                header: headers[index].clone(),
                index,
                variant: (*variant).to_string(),
                kind,
            });
        }
    }
    None
}

/// Resolves `headers` against the built-in variant table.
pub fn resolve_columns(headers: &[String]) -> ColumnMap {
    ColumnResolver::new().resolve(headers)
}

/// Fails when the header row is blank or a required field is unresolved.
pub fn ensure_required(headers: &[String], map: &ColumnMap) -> Result<(), MappingError> {
    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(MappingError::NoHeaders);
    }
    let missing = map.missing_required();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(MappingError::MissingRequired(missing))
    }
}
