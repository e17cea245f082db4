use super::*;

#[test]
fn tokenize_splits_operators_without_whitespace() {
    let t = tokenize("age>=30").unwrap();
    assert_eq!(t, vec!["age", ">=", "30"]);
}

#[test]
fn tokenize_groups_operator_runs() {
    let t = tokenize("a <> b != c").unwrap();
    assert_eq!(t, vec!["a", "<>", "b", "!=", "c"]);
}

#[test]
fn tokenize_keeps_quotes_on_literals() {
    let t = tokenize(r#"name = 'John Smith' and city = "ny""#).unwrap();
    assert_eq!(t, vec!["name", "=", "'John Smith'", "and", "city", "=", "\"ny\""]);
}

#[test]
fn tokenize_splits_parens_and_commas() {
    let t = tokenize("COUNT(*),name").unwrap();
    assert_eq!(t, vec!["COUNT", "(", "*", ")", ",", "name"]);
}

#[test]
fn tokenize_escaped_quote_inside_literal() {
    let t = tokenize(r"name = 'it\'s'").unwrap();
    assert_eq!(t, vec!["name", "=", "'it's'"]);
}

#[test]
fn tokenize_empty_literal() {
    let t = tokenize("name = ''").unwrap();
    assert_eq!(t, vec!["name", "=", "''"]);
}

#[test]
fn tokenize_unclosed_quote_errors() {
    let err = tokenize("name = 'abc").unwrap_err();
    assert!(err.to_string().contains("Unclosed quote"));
}

#[test]
fn tokenize_text_glued_to_closing_quote_errors() {
    let err = tokenize("name = 'a'b").unwrap_err();
    assert!(err.to_string().contains("after a closing quote"));
}

#[test]
fn tokenize_quote_inside_token_errors() {
    let err = tokenize("na'me' = 1").unwrap_err();
    assert!(err.to_string().contains("middle of a token"));
}
