use super::*;

#[test]
fn parse_select_basic() {
    let q = parse_ok("SELECT id, name FROM student");
    assert_eq!(q.fields, vec![col("id"), col("name")]);
    assert_eq!(q.table, "student");
    assert!(q.where_clauses.is_empty());
    assert!(q.join.is_none());
    assert!(q.group_by.is_none());
    assert!(!q.has_aggregate_without_group_by);
}

#[test]
fn parse_select_keywords_are_case_insensitive() {
    let q = parse_ok("select name from student where age >= 25 group by name");
    assert_eq!(q.table, "student");
    assert_eq!(q.where_clauses.len(), 1);
    assert_eq!(q.group_by, Some(vec!["name".to_string()]));
}

#[test]
fn parse_select_trailing_semicolon() {
    let q = parse_ok("SELECT name FROM student;");
    assert_eq!(q.table, "student");
}

#[test]
fn parse_select_group_by_multiple_fields() {
    let q = parse_ok("SELECT dept, city, COUNT(*) FROM emp GROUP BY dept, city");
    assert_eq!(q.group_by, Some(vec!["dept".to_string(), "city".to_string()]));
    assert!(!q.has_aggregate_without_group_by);
}

#[test]
fn parse_select_aggregate_without_group_by_sets_flag() {
    let q = parse_ok("SELECT COUNT(*), AVG(age) FROM student");
    assert!(q.has_aggregate_without_group_by);
    assert!(q.group_by.is_none());
}

#[test]
fn parse_select_where_then_group_by() {
    let q = parse_ok("SELECT dept, SUM(salary) FROM emp WHERE salary > 5 GROUP BY dept");
    assert_eq!(q.where_clauses.len(), 1);
    assert_eq!(q.where_clauses[0].field, "salary");
    assert_eq!(q.group_by, Some(vec!["dept".to_string()]));
}

#[test]
fn parse_labels_follow_field_order() {
    let q = parse_ok("SELECT name, count(id), age FROM student GROUP BY name");
    assert_eq!(q.labels(), vec!["name", "COUNT(id)", "age"]);
}

#[test]
fn parse_empty_input_errors() {
    let err = parse_err("   ");
    assert!(matches!(err, QueryError::Parse(ref m) if m == "Empty query"));
}

#[test]
fn parse_non_select_errors() {
    let err = parse_err("DELETE FROM student");
    assert!(err.to_string().contains("Only SELECT is supported"));
}

#[test]
fn parse_missing_from_errors() {
    let err = parse_err("SELECT name");
    assert!(err.to_string().starts_with("Usage: select"));
}

#[test]
fn parse_empty_field_list_errors() {
    let err = parse_err("SELECT FROM student");
    assert!(err.to_string().contains("cannot be empty"));
}

#[test]
fn parse_missing_table_errors() {
    let err = parse_err("SELECT name FROM");
    assert!(err.to_string().contains("missing table name"));
}

#[test]
fn parse_star_is_rejected() {
    let err = parse_err("SELECT * FROM student");
    assert!(err.to_string().contains("SELECT * is not supported"));
}

#[test]
fn parse_trailing_comma_errors() {
    let err = parse_err("SELECT name, FROM student");
    assert!(matches!(err, QueryError::Parse(_)));
}

#[test]
fn parse_trailing_garbage_errors() {
    let err = parse_err("SELECT name FROM student WHERE age > 3 ORDER BY age");
    assert!(matches!(err, QueryError::Parse(_)));
}

#[test]
fn parse_group_without_by_errors() {
    let err = parse_err("SELECT name FROM student GROUP name");
    assert!(err.to_string().starts_with("Usage: select"));
}

#[test]
fn parse_group_by_empty_list_errors() {
    let err = parse_err("SELECT name FROM student GROUP BY");
    assert!(err.to_string().contains("at least one field"));
}
