use serde::{Deserialize, Serialize};

/// A decoded CSV table: header row plus positional data rows.
///
/// Cells are aligned with `headers` by position. A row shorter than the header
/// row reads as empty for the missing trailing cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// True when a header row was decoded.
    pub fn has_headers(&self) -> bool {
        self.headers.iter().any(|h| !h.trim().is_empty())
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of the first column carrying exactly this header.
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    /// Reads a cell by row and header name.
    pub fn get(&self, row: usize, header: &str) -> Option<&str> {
        let col = self.column_index(header)?;
        let cells = self.rows.get(row)?;
        Some(cells.get(col).map(String::as_str).unwrap_or(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RawTable {
        RawTable::new(
            vec!["DNI".to_string(), "TRABAJADOR".to_string()],
            vec![
                vec!["12345678".to_string(), "PEREZ JUAN".to_string()],
                vec!["87654321".to_string()],
            ],
        )
    }

    #[test]
    fn get_by_header() {
        let t = table();
        assert_eq!(t.get(0, "TRABAJADOR"), Some("PEREZ JUAN"));
        assert_eq!(t.get(1, "DNI"), Some("87654321"));
    }

    #[test]
    fn short_rows_read_as_empty() {
        assert_eq!(table().get(1, "TRABAJADOR"), Some(""));
    }

    #[test]
    fn unknown_header_or_row() {
        let t = table();
        assert_eq!(t.get(0, "CARGO"), None);
        assert_eq!(t.get(5, "DNI"), None);
    }

    #[test]
    fn blank_headers_are_not_a_header_row() {
        let t = RawTable::new(vec![String::new(), "  ".to_string()], Vec::new());
        assert!(!t.has_headers());
        assert!(!RawTable::default().has_headers());
    }
}
