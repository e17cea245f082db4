use super::where_clause::parse_where_clauses;
use crate::error::QueryError;
use crate::parser::command::{
    FieldSpec, JoinCondition, JoinDescriptor, JoinType, QueryDescriptor, WhereClause,
};

const SELECT_USAGE: &str = "Usage: select <field1,field2> from <table> [[inner|left|right] join <table2> on <a.col> = <b.col>] [where <field> <op> <value> [and ...]] [group by <field1,field2>]";

pub(super) fn parse_select(tokens: &[String]) -> Result<QueryDescriptor, QueryError> {
    let from_idx = tokens
        .iter()
        .position(|t| t.eq_ignore_ascii_case("from"))
        .ok_or_else(|| QueryError::parse(SELECT_USAGE))?;
    if from_idx <= 1 {
        return Err(QueryError::parse(
            "SELECT field list cannot be empty. Use comma-separated field names.",
        ));
    }

    let fields = parse_select_fields(&tokens[1..from_idx])?;
    if from_idx + 1 >= tokens.len() || is_clause_keyword(&tokens[from_idx + 1]) {
        return Err(QueryError::parse("SELECT missing table name after FROM"));
    }
    let table = tokens[from_idx + 1].clone();

    let mut i = from_idx + 2;
    let mut join: Option<JoinDescriptor> = None;
    let mut where_clauses: Vec<WhereClause> = Vec::new();
    let mut group_by: Option<Vec<String>> = None;

    if i < tokens.len() && !tokens[i].eq_ignore_ascii_case("where") && !tokens[i].eq_ignore_ascii_case("group") {
        let (descriptor, next_i) = parse_join(tokens, i)?;
        join = Some(descriptor);
        i = next_i;
    }

    if i < tokens.len() && tokens[i].eq_ignore_ascii_case("where") {
        let where_end = find_where_end(tokens, i + 1);
        if where_end == i + 1 {
            return Err(QueryError::parse(SELECT_USAGE));
        }
        where_clauses = parse_where_clauses(&tokens[i + 1..where_end])?;
        i = where_end;
    }

    if i < tokens.len() && tokens[i].eq_ignore_ascii_case("group") {
        if i + 1 >= tokens.len() || !tokens[i + 1].eq_ignore_ascii_case("by") {
            return Err(QueryError::parse(SELECT_USAGE));
        }
        let (cols, next_i) = parse_group_by_fields(tokens, i + 2)?;
        group_by = Some(cols);
        i = next_i;
    }

    if i != tokens.len() {
        return Err(QueryError::parse(SELECT_USAGE));
    }

    let has_aggregate_without_group_by =
        group_by.is_none() && fields.iter().any(FieldSpec::is_aggregate);

    Ok(QueryDescriptor {
        fields,
        table,
        where_clauses,
        join,
        group_by,
        has_aggregate_without_group_by,
    })
}

fn is_clause_keyword(token: &str) -> bool {
    ["where", "group", "join", "on"]
        .iter()
        .any(|kw| token.eq_ignore_ascii_case(kw))
}

/// `[<type>] join <table> on <left> = <right>` starting at `i`.
fn parse_join(tokens: &[String], i: usize) -> Result<(JoinDescriptor, usize), QueryError> {
    let (join_type, kw) = if tokens[i].eq_ignore_ascii_case("join") {
        (JoinType::Inner, i)
    } else if i + 1 < tokens.len() && tokens[i + 1].eq_ignore_ascii_case("join") {
        (tokens[i].parse::<JoinType>()?, i + 1)
    } else if i + 2 < tokens.len()
        && tokens[i + 1].eq_ignore_ascii_case("outer")
        && tokens[i + 2].eq_ignore_ascii_case("join")
    {
        (tokens[i].parse::<JoinType>()?, i + 2)
    } else {
        return Err(QueryError::parse(SELECT_USAGE));
    };

    if kw + 5 >= tokens.len() || !tokens[kw + 2].eq_ignore_ascii_case("on") {
        return Err(QueryError::parse(
            "Usage: [inner|left|right] join <table2> on <a.col> = <b.col>",
        ));
    }
    if tokens[kw + 4] != "=" {
        return Err(QueryError::parse(format!(
            "JOIN ON only supports equality, got '{}'",
            tokens[kw + 4]
        )));
    }

    Ok((
        JoinDescriptor {
            join_type,
            table: tokens[kw + 1].clone(),
            condition: JoinCondition {
                left: tokens[kw + 3].clone(),
                right: tokens[kw + 5].clone(),
            },
        },
        kw + 6,
    ))
}

fn parse_select_fields(tokens: &[String]) -> Result<Vec<FieldSpec>, QueryError> {
    let mut fields: Vec<FieldSpec> = Vec::new();
    let mut i = 0usize;
    while i < tokens.len() {
        if tokens[i] == "," {
            return Err(QueryError::parse(
                "SELECT field list cannot be empty. Use comma-separated field names.",
            ));
        }
        if tokens[i] == "*" {
            return Err(QueryError::parse(
                "SELECT * is not supported. List the fields explicitly.",
            ));
        }
        let text = if i + 1 < tokens.len() && tokens[i + 1] == "(" {
            let close = tokens[i + 1..]
                .iter()
                .position(|t| t == ")")
                .map(|p| p + i + 1)
                .ok_or_else(|| {
                    QueryError::parse("Bad SELECT function syntax. Use fn(col) or fn(*)")
                })?;
            let args = &tokens[i + 2..close];
            if args.is_empty() {
                return Err(QueryError::parse(
                    "Bad SELECT function syntax. Use fn(col) or fn(*)",
                ));
            }
            let t = format!("{}({})", tokens[i], args.join(" "));
            i = close + 1;
            t
        } else {
            let t = tokens[i].clone();
            i += 1;
            t
        };
        fields.push(FieldSpec::parse(&text));
        if i < tokens.len() {
            if tokens[i] != "," {
                return Err(QueryError::parse(
                    "Bad SELECT field list. Use comma-separated field names.",
                ));
            }
            i += 1;
            if i >= tokens.len() {
                return Err(QueryError::parse("SELECT field list cannot end with comma"));
            }
        }
    }
    Ok(fields)
}

fn parse_group_by_fields(
    tokens: &[String],
    mut i: usize,
) -> Result<(Vec<String>, usize), QueryError> {
    let mut cols: Vec<String> = Vec::new();
    loop {
        if i >= tokens.len() {
            return Err(QueryError::parse("GROUP BY requires at least one field"));
        }
        if tokens[i] == "," || tokens[i] == "(" || tokens[i] == ")" {
            return Err(QueryError::parse("Bad GROUP BY field list"));
        }
        cols.push(tokens[i].clone());
        i += 1;
        if i < tokens.len() && tokens[i] == "," {
            i += 1;
            continue;
        }
        break;
    }
    Ok((cols, i))
}

fn find_where_end(tokens: &[String], start: usize) -> usize {
    tokens[start..]
        .iter()
        .position(|t| t.eq_ignore_ascii_case("group"))
        .map(|p| p + start)
        .unwrap_or(tokens.len())
}
