use crate::parser::command::FieldSpec;
use crate::types::{Row, Value};

/// Projects each row onto exactly `fields`, keyed by the field text. A field
/// the row lacks comes out null.
pub fn project_rows(rows: &[Row], fields: &[FieldSpec]) -> Vec<Row> {
    let labels: Vec<String> = fields.iter().map(FieldSpec::label).collect();
    rows.iter()
        .map(|row| {
            labels
                .iter()
                .map(|label| {
                    let value = row.get(label).cloned().unwrap_or(Value::Null);
                    (label.clone(), value)
                })
                .collect()
        })
        .collect()
}
