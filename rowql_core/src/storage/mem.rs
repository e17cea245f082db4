use std::collections::HashMap;

use crate::error::QueryError;
use crate::storage::engine::TableLoader;
use crate::storage::schema::Table;
use crate::types::{Row, Value};

/// In-memory table source using HashMap
#[derive(Debug, Default, Clone)]
pub struct MemLoader {
    tables: HashMap<String, Table>,
}

impl MemLoader {
    /// Creates a new empty in-memory loader
    pub fn new() -> Self {
        Self {
            tables: HashMap::new(),
        }
    }

    pub fn create_table(&mut self, table: &str, columns: &[&str]) -> Result<(), QueryError> {
        if self.tables.contains_key(table) {
            return Err(QueryError::Schema(format!(
                "Table '{}' already exists",
                table
            )));
        }
        let columns = columns.iter().map(|c| c.to_string()).collect();
        self.tables
            .insert(table.to_string(), Table::new(table, columns));
        Ok(())
    }

    /// Appends a row given positionally, one raw string per declared column.
    pub fn insert_row(&mut self, table: &str, values: &[&str]) -> Result<(), QueryError> {
        let t = self
            .tables
            .get_mut(table)
            .ok_or_else(|| QueryError::TableNotFound(table.to_string()))?;
        if values.len() != t.columns.len() {
            return Err(QueryError::Schema(format!(
                "Expected {} values but got {}",
                t.columns.len(),
                values.len()
            )));
        }
        let row: Row = t
            .columns
            .iter()
            .zip(values)
            .map(|(c, v)| (c.clone(), Value::from(*v)))
            .collect();
        t.rows.push(row);
        Ok(())
    }

    /// Adds a prebuilt table, replacing any table of the same name.
    pub fn put_table(&mut self, table: Table) {
        self.tables.insert(table.name.clone(), table);
    }
}

impl TableLoader for MemLoader {
    async fn load_table(&self, name: &str) -> Result<Table, QueryError> {
        self.tables
            .get(name)
            .cloned()
            .ok_or_else(|| QueryError::TableNotFound(name.to_string()))
    }
}
