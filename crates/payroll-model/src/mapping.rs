//! Resolved canonical-field → source-header bindings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::fields::{CanonicalField, REQUIRED_FIELDS};

/// One source column bound to a canonical field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnBinding {
    /// Header text exactly as it appears in the source file.
    pub header: String,
    /// Zero-based column position of that header.
    pub index: usize,
}

/// Column bindings for one file.
///
/// A field binds at most once; later attempts to bind an already-resolved
/// field are ignored. The same header may back several fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnMap {
    bindings: BTreeMap<CanonicalField, ColumnBinding>,
}

impl ColumnMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `field` unless it is already bound. Returns true when bound now.
    pub fn bind(&mut self, field: CanonicalField, header: impl Into<String>, index: usize) -> bool {
        if self.bindings.contains_key(&field) {
            return false;
        }
        self.bindings.insert(
            field,
            ColumnBinding {
                header: header.into(),
                index,
            },
        );
        true
    }

    pub fn binding(&self, field: CanonicalField) -> Option<&ColumnBinding> {
        self.bindings.get(&field)
    }

    pub fn header(&self, field: CanonicalField) -> Option<&str> {
        self.bindings.get(&field).map(|b| b.header.as_str())
    }

    pub fn is_resolved(&self, field: CanonicalField) -> bool {
        self.bindings.contains_key(&field)
    }

    /// Reads the cell backing `field` from a positional row.
    ///
    /// `None` when the field is unresolved; `Some("")` when the row is too short.
    pub fn cell<'r>(&self, row: &'r [String], field: CanonicalField) -> Option<&'r str> {
        let binding = self.bindings.get(&field)?;
        Some(row.get(binding.index).map(String::as_str).unwrap_or(""))
    }

    /// Required fields with no binding, in declaration order.
    pub fn missing_required(&self) -> Vec<CanonicalField> {
        REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|field| !self.is_resolved(*field))
            .collect()
    }

    /// Fields with no binding, in declaration order.
    pub fn unresolved(&self) -> Vec<CanonicalField> {
        CanonicalField::ALL
            .iter()
            .copied()
            .filter(|field| !self.is_resolved(*field))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CanonicalField, &ColumnBinding)> {
        self.bindings.iter().map(|(field, binding)| (*field, binding))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_binding_wins() {
        let mut map = ColumnMap::new();
        assert!(map.bind(CanonicalField::Dni, "DNI", 0));
        assert!(!map.bind(CanonicalField::Dni, "DOCUMENTO", 3));
        assert_eq!(map.header(CanonicalField::Dni), Some("DNI"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn cell_lookup() {
        let mut map = ColumnMap::new();
        map.bind(CanonicalField::FullName, "TRABAJADOR", 1);
        map.bind(CanonicalField::Area, "AREA", 4);
        let row = vec!["x".to_string(), "ANA".to_string()];
        assert_eq!(map.cell(&row, CanonicalField::FullName), Some("ANA"));
        assert_eq!(map.cell(&row, CanonicalField::Area), Some(""));
        assert_eq!(map.cell(&row, CanonicalField::Dni), None);
    }

    #[test]
    fn missing_required_in_order() {
        let map = ColumnMap::new();
        assert_eq!(
            map.missing_required(),
            vec![CanonicalField::FullName, CanonicalField::Dni]
        );
        assert_eq!(map.unresolved().len(), CanonicalField::ALL.len());
    }
}
