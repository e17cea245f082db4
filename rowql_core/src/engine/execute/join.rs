use std::cmp::Ordering;

use crate::engine::execute::coerce::coerce_value;
use crate::parser::command::{FieldSpec, JoinCondition, JoinType};
use crate::storage::Table;
use crate::types::{Row, Value};

/// Joins `main` (the query's declared table) with the rows of the joined table.
///
/// The outer loop always runs over `main` for INNER and LEFT, so their output
/// keeps main-table order; RIGHT runs over the joined rows instead.
pub fn join_rows(
    join_type: JoinType,
    main: &Table,
    joined: &[Row],
    condition: &JoinCondition,
    fields: &[FieldSpec],
) -> Vec<Row> {
    match join_type {
        JoinType::Inner => inner_join(main, joined, condition, fields),
        JoinType::Left => left_join(main, joined, condition, fields),
        JoinType::Right => right_join(main, joined, condition, fields),
    }
}

/// One output row per matching pair. Rows carry only the columns the requested
/// fields read; main-table columns are not added wholesale.
pub fn inner_join(
    main: &Table,
    joined: &[Row],
    condition: &JoinCondition,
    fields: &[FieldSpec],
) -> Vec<Row> {
    let mut out: Vec<Row> = Vec::new();
    for main_row in &main.rows {
        for joined_row in joined {
            if keys_match(main_row, joined_row, condition) {
                out.push(build_row(
                    Some(main_row),
                    Some(joined_row),
                    fields,
                    &main.name,
                    false,
                ));
            }
        }
    }
    out
}

/// Every main row appears at least once. An unmatched main row produces one
/// row whose joined-table fields are null.
pub fn left_join(
    main: &Table,
    joined: &[Row],
    condition: &JoinCondition,
    fields: &[FieldSpec],
) -> Vec<Row> {
    let mut out: Vec<Row> = Vec::new();
    for main_row in &main.rows {
        let matching: Vec<&Row> = joined
            .iter()
            .filter(|joined_row| keys_match(main_row, joined_row, condition))
            .collect();
        if matching.is_empty() {
            out.push(build_row(Some(main_row), None, fields, &main.name, true));
            continue;
        }
        for joined_row in matching {
            out.push(build_row(
                Some(main_row),
                Some(joined_row),
                fields,
                &main.name,
                true,
            ));
        }
    }
    out
}

/// Exactly one row per joined row, paired with the first matching main row.
/// Without a match the main side is the all-null row built from `main.columns`.
pub fn right_join(
    main: &Table,
    joined: &[Row],
    condition: &JoinCondition,
    fields: &[FieldSpec],
) -> Vec<Row> {
    let null_main = main.null_row();
    joined
        .iter()
        .map(|joined_row| {
            let main_row = main
                .rows
                .iter()
                .find(|main_row| keys_match(main_row, joined_row, condition))
                .unwrap_or(&null_main);
            build_row(Some(main_row), Some(joined_row), fields, &main.name, true)
        })
        .collect()
}

/// Join keys are compared after coercion; a null or missing key matches nothing.
fn keys_match(main_row: &Row, joined_row: &Row, condition: &JoinCondition) -> bool {
    let lhs = coerce_value(main_row.lookup(&condition.left));
    if lhs.is_null() {
        return false;
    }
    let rhs = coerce_value(joined_row.lookup(&condition.right));
    lhs.compare(&rhs) == Some(Ordering::Equal)
}

/// Splits `table.column`; a bare name belongs to the main table.
fn owning_table<'a>(field: &'a str, main_table: &'a str) -> &'a str {
    field.split_once('.').map(|(t, _)| t).unwrap_or(main_table)
}

fn build_row(
    main_row: Option<&Row>,
    joined_row: Option<&Row>,
    fields: &[FieldSpec],
    main_table: &str,
    include_all_main: bool,
) -> Row {
    let mut out = Row::new();

    if include_all_main && let Some(m) = main_row {
        for (key, value) in m.iter() {
            out.insert(format!("{main_table}.{key}"), value.clone());
        }
    }

    for field in fields.iter().filter_map(FieldSpec::source_column) {
        let from_main = owning_table(field, main_table) == main_table;
        let value = match (from_main, main_row, joined_row) {
            (true, Some(m), _) => m.lookup(field),
            (_, _, Some(j)) => j.lookup(field),
            _ => None,
        };
        out.insert(field, value.cloned().unwrap_or(Value::Null));
    }

    out
}
