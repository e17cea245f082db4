use thiserror::Error;

/// Every way a query can fail. All variants abort the query; nothing is retried
/// and no partial result is returned.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Unsupported operator: {0}")]
    UnsupportedOperator(String),

    #[error("Unsupported JOIN type: {0}")]
    UnsupportedJoinType(String),

    #[error("{0}")]
    Parse(String),

    #[error("Table '{0}' does not exist")]
    TableNotFound(String),

    #[error("Failed to read table '{table}': {source}")]
    Io {
        table: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV in table '{table}': {source}")]
    Csv {
        table: String,
        #[source]
        source: csv::Error,
    },

    #[error("{0}")]
    Schema(String),
}

impl QueryError {
    pub(crate) fn parse(msg: impl Into<String>) -> Self {
        QueryError::Parse(msg.into())
    }
}
