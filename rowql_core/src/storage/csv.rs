use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::QueryError;
use crate::storage::engine::TableLoader;
use crate::storage::schema::Table;
use crate::types::{Row, Value};

/// Loads table `name` from `<root>/<name>.csv`. The header line gives the
/// column names; every cell is kept as raw text.
#[derive(Debug, Clone)]
pub struct CsvLoader {
    root: PathBuf,
}

impl CsvLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn table_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.csv"))
    }
}

impl TableLoader for CsvLoader {
    async fn load_table(&self, name: &str) -> Result<Table, QueryError> {
        let path = self.table_path(name);
        let bytes = tokio::fs::read(&path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                QueryError::TableNotFound(name.to_string())
            } else {
                QueryError::Io {
                    table: name.to_string(),
                    source: e,
                }
            }
        })?;
        let table = parse_csv(name, &bytes)?;
        debug!(table = name, path = %path.display(), rows = table.rows.len(), "loaded csv table");
        Ok(table)
    }
}

/// Parses CSV bytes into a table. Records shorter than the header simply lack
/// the trailing columns; extra cells are ignored.
pub fn parse_csv(name: &str, bytes: &[u8]) -> Result<Table, QueryError> {
    let csv_err = |source: csv::Error| QueryError::Csv {
        table: name.to_string(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let columns: Vec<String> = reader
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut table = Table::new(name, columns);
    for record in reader.records() {
        let record = record.map_err(csv_err)?;
        let row: Row = table
            .columns
            .iter()
            .zip(record.iter())
            .map(|(c, v)| (c.clone(), Value::from(v)))
            .collect();
        table.rows.push(row);
    }
    Ok(table)
}
