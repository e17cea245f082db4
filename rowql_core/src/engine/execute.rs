pub mod aggregate;
pub mod coerce;
pub mod condition;
pub mod join;
pub mod project;

use tracing::debug;

use crate::error::QueryError;
use crate::parser::command::QueryDescriptor;
use crate::storage::TableLoader;
use crate::types::Row;

/// Runs one query: load, optional join, filter, then aggregate, group or
/// project depending on the query shape.
///
/// Loads are awaited one after the other; everything after loading is
/// synchronous over fully materialized rows.
#[tracing::instrument(level = "debug", skip_all, fields(table = %query.table))]
pub async fn execute_query<L: TableLoader>(
    query: &QueryDescriptor,
    loader: &L,
) -> Result<Vec<Row>, QueryError> {
    let main = loader.load_table(&query.table).await?;
    debug!(rows = main.rows.len(), "loaded main table");

    let rows = match &query.join {
        Some(join) => {
            let joined = loader.load_table(&join.table).await?;
            debug!(join_table = %join.table, rows = joined.rows.len(), "loaded joined table");
            let condition = join.condition.oriented(&query.table, &join.table);
            let out = join::join_rows(
                join.join_type,
                &main,
                &joined.rows,
                &condition,
                &query.fields,
            );
            debug!(join_type = ?join.join_type, rows = out.len(), "joined");
            out
        }
        None => main.rows,
    };

    let filtered = condition::filter_rows(rows, &query.where_clauses);
    debug!(rows = filtered.len(), clauses = query.where_clauses.len(), "filtered");

    let out = if query.has_aggregate_without_group_by {
        vec![aggregate::aggregate_all(&filtered, &query.fields)]
    } else if let Some(group_by) = query.group_by.as_deref() {
        aggregate::group_by(&filtered, Some(group_by), &query.fields, false)
    } else {
        project::project_rows(&filtered, &query.fields)
    };
    debug!(rows = out.len(), "query complete");
    Ok(out)
}
