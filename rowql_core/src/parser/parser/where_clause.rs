use crate::error::QueryError;
use crate::parser::command::{CompareOp, WhereClause};

const WHERE_USAGE: &str = "Usage: ... where <field> <op> <value> [and <field> <op> <value> ...]";

/// Parses `a op v [and b op w ...]`. Clauses are implicitly conjoined; `or`
/// and parentheses are rejected.
pub(super) fn parse_where_clauses(tokens: &[String]) -> Result<Vec<WhereClause>, QueryError> {
    let mut clauses: Vec<WhereClause> = Vec::new();
    let mut idx = 0usize;
    loop {
        clauses.push(parse_predicate(tokens, &mut idx)?);
        if idx >= tokens.len() {
            break;
        }
        if tokens[idx].eq_ignore_ascii_case("and") {
            idx += 1;
            continue;
        }
        if tokens[idx].eq_ignore_ascii_case("or") {
            return Err(QueryError::parse(
                "OR is not supported in WHERE. Clauses can only be combined with AND",
            ));
        }
        return Err(QueryError::parse(WHERE_USAGE));
    }
    Ok(clauses)
}

fn parse_predicate(tokens: &[String], idx: &mut usize) -> Result<WhereClause, QueryError> {
    if *idx + 2 >= tokens.len() {
        return Err(QueryError::parse(WHERE_USAGE));
    }
    let field = &tokens[*idx];
    if field == "(" || field == ")" || field == "," {
        return Err(QueryError::parse(WHERE_USAGE));
    }
    let op: CompareOp = tokens[*idx + 1].parse()?;
    let value = &tokens[*idx + 2];
    if value == "(" || value == ")" || value == "," {
        return Err(QueryError::parse(WHERE_USAGE));
    }
    *idx += 3;
    Ok(WhereClause {
        field: field.clone(),
        op,
        value: value.clone(),
    })
}
