use crate::error::QueryError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CompareOp {
    Eq,
    Gt,
    Lt,
    Gte,
    Lte,
    Ne,
}

impl FromStr for CompareOp {
    type Err = QueryError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "=" => Ok(CompareOp::Eq),
            ">" => Ok(CompareOp::Gt),
            "<" => Ok(CompareOp::Lt),
            ">=" => Ok(CompareOp::Gte),
            "<=" => Ok(CompareOp::Lte),
            "!=" => Ok(CompareOp::Ne),
            other => Err(QueryError::UnsupportedOperator(other.to_string())),
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CompareOp::Eq => "=",
            CompareOp::Gt => ">",
            CompareOp::Lt => "<",
            CompareOp::Gte => ">=",
            CompareOp::Lte => "<=",
            CompareOp::Ne => "!=",
        })
    }
}

/// One `field op value` comparison. A query's clauses are ANDed together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WhereClause {
    pub field: String,
    pub op: CompareOp,
    /// The literal as written, quotes included.
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum JoinType {
    Inner,
    Left,
    Right,
}

impl FromStr for JoinType {
    type Err = QueryError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_uppercase().as_str() {
            "INNER" => Ok(JoinType::Inner),
            "LEFT" => Ok(JoinType::Left),
            "RIGHT" => Ok(JoinType::Right),
            _ => Err(QueryError::UnsupportedJoinType(raw.to_string())),
        }
    }
}

/// Equality predicate between a main-table field and a joined-table field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JoinCondition {
    pub left: String,
    pub right: String,
}

impl JoinCondition {
    /// Returns the condition with `left` on the main table. A condition written
    /// as `joined.x = main.y` is swapped; anything else is kept as written.
    pub fn oriented(&self, main_table: &str, join_table: &str) -> JoinCondition {
        let owner = |f: &str| f.split_once('.').map(|(t, _)| t.to_string());
        let left_owner = owner(&self.left);
        let right_owner = owner(&self.right);
        if left_owner.as_deref() == Some(join_table) && right_owner.as_deref() == Some(main_table) {
            JoinCondition {
                left: self.right.clone(),
                right: self.left.clone(),
            }
        } else {
            self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JoinDescriptor {
    pub join_type: JoinType,
    pub table: String,
    pub condition: JoinCondition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AggregateFn {
    Count,
    Sum,
    Avg,
    Min,
    Max,
}

impl AggregateFn {
    fn from_name(name: &str) -> Option<Self> {
        match name.to_uppercase().as_str() {
            "COUNT" => Some(AggregateFn::Count),
            "SUM" => Some(AggregateFn::Sum),
            "AVG" => Some(AggregateFn::Avg),
            "MIN" => Some(AggregateFn::Min),
            "MAX" => Some(AggregateFn::Max),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AggregateFn::Count => "COUNT",
            AggregateFn::Sum => "SUM",
            AggregateFn::Avg => "AVG",
            AggregateFn::Min => "MIN",
            AggregateFn::Max => "MAX",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AggregateArg {
    Star,
    Column(String),
}

/// A requested output column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FieldSpec {
    Column(String),
    Aggregate { func: AggregateFn, arg: AggregateArg },
}

impl FieldSpec {
    /// Matches `FUNC(arg)` for the five aggregate functions (any case). Anything
    /// else, including an unknown function name, is a plain column.
    pub fn parse(text: &str) -> FieldSpec {
        let text = text.trim();
        let plain = || FieldSpec::Column(text.to_string());
        let Some((name, rest)) = text.split_once('(') else {
            return plain();
        };
        let Some(arg) = rest.strip_suffix(')') else {
            return plain();
        };
        let Some(func) = AggregateFn::from_name(name.trim()) else {
            return plain();
        };
        let arg = arg.trim();
        if arg.is_empty() {
            return plain();
        }
        let arg = if arg == "*" {
            AggregateArg::Star
        } else {
            AggregateArg::Column(arg.to_string())
        };
        FieldSpec::Aggregate { func, arg }
    }

    pub fn is_aggregate(&self) -> bool {
        matches!(self, FieldSpec::Aggregate { .. })
    }

    /// The row key this field is written under in every output row.
    pub fn label(&self) -> String {
        self.to_string()
    }

    /// The input column the field reads, if any. `COUNT(*)` reads none.
    pub fn source_column(&self) -> Option<&str> {
        match self {
            FieldSpec::Column(name) => Some(name),
            FieldSpec::Aggregate {
                arg: AggregateArg::Column(c),
                ..
            } => Some(c),
            FieldSpec::Aggregate {
                arg: AggregateArg::Star,
                ..
            } => None,
        }
    }
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldSpec::Column(name) => f.write_str(name),
            FieldSpec::Aggregate { func, arg } => match arg {
                AggregateArg::Star => write!(f, "{}(*)", func.name()),
                AggregateArg::Column(c) => write!(f, "{}({c})", func.name()),
            },
        }
    }
}

/// Everything the executor needs to run one SELECT.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryDescriptor {
    pub fields: Vec<FieldSpec>,
    pub table: String,
    pub where_clauses: Vec<WhereClause>,
    pub join: Option<JoinDescriptor>,
    pub group_by: Option<Vec<String>>,
    pub has_aggregate_without_group_by: bool,
}

impl QueryDescriptor {
    pub fn labels(&self) -> Vec<String> {
        self.fields.iter().map(FieldSpec::label).collect()
    }
}
