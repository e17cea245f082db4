use std::collections::HashMap;

use crate::parser::command::{AggregateArg, AggregateFn, FieldSpec};
use crate::types::{Row, Value};

/// Key shared by every row when aggregating without GROUP BY.
const AGGREGATE_KEY: &str = "AGGREGATE";

/// Running numeric state of one SUM/AVG/MIN/MAX field within a group.
#[derive(Debug, Clone, Default)]
struct NumericState {
    sum: f64,
    min: Option<f64>,
    max: Option<f64>,
    seen: bool,
}

impl NumericState {
    fn add(&mut self, n: f64) {
        self.sum += n;
        self.min = Some(self.min.map_or(n, |m| m.min(n)));
        self.max = Some(self.max.map_or(n, |m| m.max(n)));
        self.seen = true;
    }
}

/// Per-group accumulator. `numeric` is indexed like the requested field list
/// and holds state only for SUM/AVG/MIN/MAX fields.
#[derive(Debug)]
struct GroupAccumulator<'a> {
    count: usize,
    rows: Vec<&'a Row>,
    numeric: Vec<Option<NumericState>>,
}

impl<'a> GroupAccumulator<'a> {
    fn new(fields: &[FieldSpec]) -> Self {
        let numeric = fields
            .iter()
            .map(|f| match f {
                FieldSpec::Aggregate {
                    func: AggregateFn::Sum | AggregateFn::Avg | AggregateFn::Min | AggregateFn::Max,
                    arg: AggregateArg::Column(_),
                } => Some(NumericState::default()),
                _ => None,
            })
            .collect();
        Self {
            count: 0,
            rows: Vec::new(),
            numeric,
        }
    }

    /// Counts the row and folds its numeric values. Values that do not parse as
    /// numbers are skipped here but the row still counts.
    fn push(&mut self, row: &'a Row, fields: &[FieldSpec]) {
        self.count += 1;
        self.rows.push(row);
        for (state, field) in self.numeric.iter_mut().zip(fields) {
            let (Some(state), Some(col)) = (state.as_mut(), field.source_column()) else {
                continue;
            };
            if let Some(n) = row.get(col).and_then(Value::as_f64) {
                state.add(n);
            }
        }
    }

    fn non_null_count(&self, col: &str) -> usize {
        self.rows
            .iter()
            .filter(|r| r.get(col).is_some_and(|v| !v.is_null()))
            .count()
    }

    fn finish(&self, fields: &[FieldSpec]) -> Row {
        let mut out = Row::with_capacity(fields.len());
        for (idx, field) in fields.iter().enumerate() {
            let value = match field {
                FieldSpec::Column(name) => self
                    .rows
                    .first()
                    .and_then(|r| r.get(name))
                    .cloned()
                    .unwrap_or(Value::Null),
                FieldSpec::Aggregate {
                    func: AggregateFn::Count,
                    arg: AggregateArg::Star,
                } => Value::Number(self.count as f64),
                FieldSpec::Aggregate {
                    func: AggregateFn::Count,
                    arg: AggregateArg::Column(col),
                } => Value::Number(self.non_null_count(col) as f64),
                FieldSpec::Aggregate { func, arg } => {
                    let state = self.numeric[idx].clone().unwrap_or_default();
                    match (func, arg) {
                        (AggregateFn::Sum, _) => Value::Number(state.sum),
                        // Divides by the non-null row count, not by the number
                        // of values that parsed as numbers.
                        (AggregateFn::Avg, AggregateArg::Column(col)) if state.seen => {
                            Value::Number(state.sum / self.non_null_count(col) as f64)
                        }
                        (AggregateFn::Avg, _) => Value::Number(0.0),
                        (AggregateFn::Min, _) => Value::from(state.min),
                        (AggregateFn::Max, _) => Value::from(state.max),
                        (AggregateFn::Count, _) => Value::Null,
                    }
                }
            };
            out.insert(field.label(), value);
        }
        out
    }
}

/// The partition key of `row`: the GROUP BY values joined with `|`, a shared
/// constant when aggregating without GROUP BY, otherwise the empty string.
pub fn group_key(row: &Row, group_by: Option<&[String]>, has_aggregate_without_group_by: bool) -> String {
    match group_by {
        Some(cols) => cols
            .iter()
            .map(|c| row.get(c).map(Value::to_string).unwrap_or_default())
            .collect::<Vec<_>>()
            .join("|"),
        None if has_aggregate_without_group_by => AGGREGATE_KEY.to_string(),
        None => String::new(),
    }
}

/// Partitions `rows` by group key and emits one row per group, shaped to
/// `fields`, in the order each group was first seen.
///
/// Plain columns in `fields` take their value from the group's first row.
/// Whether that column is actually determined by the group key is not checked.
pub fn group_by(
    rows: &[Row],
    group_by: Option<&[String]>,
    fields: &[FieldSpec],
    has_aggregate_without_group_by: bool,
) -> Vec<Row> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<GroupAccumulator<'_>> = Vec::new();

    for row in rows {
        let key = group_key(row, group_by, has_aggregate_without_group_by);
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(GroupAccumulator::new(fields));
            groups.len() - 1
        });
        groups[slot].push(row, fields);
    }

    groups.iter().map(|g| g.finish(fields)).collect()
}

/// Collapses every row into a single aggregate row. Unlike [`group_by`] this
/// always yields exactly one row, even for empty input: `COUNT` is 0, `SUM`
/// and `AVG` are 0, `MIN`/`MAX` and plain columns are null.
pub fn aggregate_all(rows: &[Row], fields: &[FieldSpec]) -> Row {
    let mut acc = GroupAccumulator::new(fields);
    for row in rows {
        acc.push(row, fields);
    }
    acc.finish(fields)
}
