use crate::types::Value;

/// Normalizes a raw cell or literal for comparison.
///
/// Null and missing values stay null. A string wrapped in matching single or
/// double quotes loses the quotes. What remains becomes a number when its
/// trimmed form is non-empty and parses entirely as a finite number, and
/// stays text otherwise, so `inf` and `NaN` are text. `"5"`, `5` and `"'5'"`
/// all coerce to the same value.
pub fn coerce_value(raw: Option<&Value>) -> Value {
    match raw {
        None | Some(Value::Null) => Value::Null,
        Some(Value::Number(n)) => Value::Number(*n),
        Some(Value::Text(s)) => coerce_str(s),
    }
}

pub fn coerce_str(raw: &str) -> Value {
    let unquoted = strip_quotes(raw);
    let trimmed = unquoted.trim();
    if !trimmed.is_empty()
        && let Ok(n) = trimmed.parse::<f64>()
        && n.is_finite()
    {
        return Value::Number(n);
    }
    Value::Text(unquoted.to_string())
}

fn strip_quotes(s: &str) -> &str {
    for q in ['\'', '"'] {
        if s.len() >= 2
            && let Some(inner) = s.strip_prefix(q).and_then(|r| r.strip_suffix(q))
        {
            return inner;
        }
    }
    s
}
