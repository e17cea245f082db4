use std::path::PathBuf;

pub mod engine;
pub mod error;
pub mod parser;
pub mod storage;
pub mod types;

pub use error::QueryError;
use storage::{CsvLoader, TableLoader};
use types::{ResultSet, Row};

/// Entry point: parses query text and runs it against a table loader.
#[derive(Debug)]
pub struct Database<L = CsvLoader> {
    loader: L,
}

impl Database<CsvLoader> {
    /// Opens a directory of `<table>.csv` files.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            loader: CsvLoader::new(path),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        self.loader.root()
    }
}

impl<L: TableLoader> Database<L> {
    pub fn with_loader(loader: L) -> Self {
        Self { loader }
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    pub fn loader_mut(&mut self) -> &mut L {
        &mut self.loader
    }

    /// Parses and executes `input`, returning the result rows.
    pub async fn execute(&self, input: &str) -> Result<Vec<Row>, QueryError> {
        let query = parser::parse(input)?;
        engine::execute_query(&query, &self.loader).await
    }

    /// Like [`Database::execute`] but also returns the column labels.
    pub async fn query(&self, input: &str) -> Result<ResultSet, QueryError> {
        let query = parser::parse(input)?;
        let rows = engine::execute_query(&query, &self.loader).await?;
        Ok(ResultSet {
            columns: query.labels(),
            rows,
        })
    }
}
