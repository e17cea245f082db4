use crate::types::Row;
use crate::types::Value;

/// A loaded table: its ordered column names plus the rows.
///
/// `columns` is the table's declared schema and is independent of the rows, so
/// an empty table still knows its columns.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows: Vec::new(),
        }
    }

    /// Builds a table from rows alone, taking the column list from the first
    /// row. Prefer [`Table::new`] when the schema is known.
    pub fn from_rows(name: impl Into<String>, rows: Vec<Row>) -> Self {
        let columns = rows
            .first()
            .map(|r| r.keys().map(str::to_string).collect())
            .unwrap_or_default();
        Self {
            name: name.into(),
            columns,
            rows,
        }
    }

    /// A row with every column of this table set to null.
    pub fn null_row(&self) -> Row {
        self.columns
            .iter()
            .map(|c| (c.clone(), Value::Null))
            .collect()
    }

    /// Returns the number of columns in this table
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}
