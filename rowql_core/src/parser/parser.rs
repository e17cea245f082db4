mod select;
mod tokenizer;
mod where_clause;

use crate::error::QueryError;
use crate::parser::command::QueryDescriptor;

pub use tokenizer::tokenize;

/// Parses one SELECT statement into a [`QueryDescriptor`].
pub fn parse(input: &str) -> Result<QueryDescriptor, QueryError> {
    let trimmed = input.trim();
    let trimmed = trimmed.strip_suffix(';').unwrap_or(trimmed);
    let tokens = tokenize(trimmed)?;
    if tokens.is_empty() {
        return Err(QueryError::parse("Empty query"));
    }

    match tokens[0].to_lowercase().as_str() {
        "select" => select::parse_select(&tokens),
        _ => Err(QueryError::parse(format!(
            "Unknown command '{}'. Only SELECT is supported",
            tokens[0]
        ))),
    }
}
