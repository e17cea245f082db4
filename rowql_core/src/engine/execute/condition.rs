use std::cmp::Ordering;

use crate::engine::execute::coerce::{coerce_str, coerce_value};
use crate::parser::command::{CompareOp, WhereClause};
use crate::types::Row;

/// Evaluates one clause against `row`. Both the row's value for the clause
/// field and the clause literal are coerced before comparing.
pub fn evaluate(row: &Row, clause: &WhereClause) -> bool {
    let lhs = coerce_value(row.get(&clause.field));
    let rhs = coerce_str(&clause.value);
    compare_matches(lhs.compare(&rhs), clause.op)
}

fn compare_matches(ord: Option<Ordering>, op: CompareOp) -> bool {
    match op {
        CompareOp::Eq => ord == Some(Ordering::Equal),
        CompareOp::Ne => ord != Some(Ordering::Equal),
        CompareOp::Gt => ord == Some(Ordering::Greater),
        CompareOp::Lt => ord == Some(Ordering::Less),
        CompareOp::Gte => matches!(ord, Some(Ordering::Greater | Ordering::Equal)),
        CompareOp::Lte => matches!(ord, Some(Ordering::Less | Ordering::Equal)),
    }
}

/// True when `row` satisfies every clause. An empty clause list keeps every row.
pub fn matches_all(row: &Row, clauses: &[WhereClause]) -> bool {
    clauses.iter().all(|clause| evaluate(row, clause))
}

/// Keeps the rows satisfying every clause, in their original order.
pub fn filter_rows(rows: Vec<Row>, clauses: &[WhereClause]) -> Vec<Row> {
    if clauses.is_empty() {
        return rows;
    }
    rows.into_iter()
        .filter(|row| matches_all(row, clauses))
        .collect()
}
