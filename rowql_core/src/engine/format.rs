use crate::types::{ResultSet, Value};

/// Formats a result set as a tab-separated table
pub fn format_result(result: &ResultSet) -> String {
    // Build header line with column names
    let header = result.columns.join("\t");

    // If no rows, return just the header
    if result.rows.is_empty() {
        return header;
    }

    let row_lines = result
        .rows
        .iter()
        .map(|row| {
            result
                .columns
                .iter()
                .map(|c| match row.get(c) {
                    None | Some(Value::Null) => "NULL".to_string(),
                    Some(v) => v.to_string(),
                })
                .collect::<Vec<_>>()
                .join("\t")
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("{}\n{}", header, row_lines)
}
