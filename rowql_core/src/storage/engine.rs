use crate::error::QueryError;
use crate::storage::schema::Table;
use std::future::Future;

/// Source of named tables. The executor awaits one load for the main table
/// and, when joining, one more for the joined table.
pub trait TableLoader {
    /// Loads every row of `name`. Cell values are the raw strings of the source;
    /// no numeric coercion happens here.
    fn load_table(&self, name: &str) -> impl Future<Output = Result<Table, QueryError>> + Send;
}
