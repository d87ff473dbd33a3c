//! Session column schema
//!
//! The durable store is a plain table whose first row names its columns.
//! The schema is discovered once per session by reading that header and is
//! assumed stable until the process restarts; the store may be reordered or
//! extended by humans between sessions, and the codec binds by column name,
//! so the next bootstrap picks the change up without code changes.

/// The ordered list of column names for the durable store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<String>,
}

impl Schema {
    /// Build a schema from a header row
    pub fn from_header(columns: Vec<String>) -> Self {
        Self { columns }
    }

    /// Column names in storage order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// True when the header named no columns
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Position of a column in storage order, if present
    pub fn position(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }
}
