//! Core data structures for parsed tables.

/// One data line of a table, keyed by header name.
///
/// Holds exactly one entry per header, in header order. Headers may repeat;
/// name lookups resolve to the last entry with that name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowRecord {
    entries: Vec<(String, String)>,
}

impl RowRecord {
    /// Build a record by zipping `values` against `headers`.
    ///
    /// Missing trailing values default to an empty string and values beyond
    /// the header count are dropped.
    pub fn from_values(headers: &[String], values: Vec<String>) -> Self {
        let mut values = values.into_iter();
        let entries = headers
            .iter()
            .map(|h| (h.clone(), values.next().unwrap_or_default()))
            .collect();
        Self { entries }
    }

    /// Get the value stored under `header`.
    pub fn get(&self, header: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(h, _)| h == header)
            .map(|(_, v)| v.as_str())
    }

    /// Get the value at a column position.
    #[inline]
    pub fn value_at(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|(_, v)| v.as_str())
    }

    /// Number of entries (always the table's header count).
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(header, value)` pairs in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(h, v)| (h.as_str(), v.as_str()))
    }
}

/// A delimited-text resource after parsing.
///
/// Created once per source path and shared read-only from the cache.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedTable {
    /// Column names in file order (may contain duplicates)
    pub headers: Vec<String>,
    /// Data rows in file order
    pub rows: Vec<RowRecord>,
}

impl ParsedTable {
    /// Create a new table from headers and rows.
    pub fn new(headers: Vec<String>, rows: Vec<RowRecord>) -> Self {
        Self { headers, rows }
    }

    /// Number of data rows.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    #[inline]
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}
