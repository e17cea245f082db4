use super::*;
use rowql_core::engine::project::project_rows;

#[tokio::test]
async fn test_select_projects_requested_fields() {
    let db = school_db();
    let out = run(&db, "SELECT name, age FROM student").await;
    assert_eq!(out, "name\tage\nJohn\t30\nJane\t25\nBob\t22\nAlice\t24");
}

#[tokio::test]
async fn test_select_field_order_follows_query() {
    let db = school_db();
    let rows = db.execute("SELECT age, name FROM student").await.unwrap();
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|r| r.keys().collect::<Vec<_>>() == ["age", "name"]));
}

#[tokio::test]
async fn test_select_where_numeric() {
    let db = school_db();
    let out = run(&db, "SELECT name FROM student WHERE age > 24").await;
    assert_eq!(out, "name\nJohn\nJane");
}

#[tokio::test]
async fn test_select_where_quoted_number() {
    let db = school_db();
    assert_eq!(
        run(&db, "SELECT name FROM student WHERE age > '24'").await,
        "name\nJohn\nJane"
    );
    assert_eq!(run(&db, "SELECT name FROM student WHERE age > '30'").await, "name");
}

#[tokio::test]
async fn test_select_where_text_quoted_or_bare() {
    let db = school_db();
    let quoted = run(&db, "SELECT name, age FROM student WHERE name = 'Bob'").await;
    assert_eq!(quoted, "name\tage\nBob\t22");
    let bare = run(&db, "SELECT name, age FROM student WHERE name = Bob").await;
    assert_eq!(bare, quoted);
}

#[tokio::test]
async fn test_select_where_not_equal() {
    let db = school_db();
    let out = run(&db, "SELECT name FROM student WHERE name != 'Bob'").await;
    assert_eq!(out, "name\nJohn\nJane\nAlice");
}

#[tokio::test]
async fn test_select_where_and_range() {
    let db = school_db();
    let out = run(&db, "select name from student where age >= 22 and age <= 24").await;
    assert_eq!(out, "name\nBob\nAlice");
}

#[tokio::test]
async fn test_select_unknown_field_is_null() {
    let db = school_db();
    let out = run(&db, "SELECT name, grade FROM student WHERE id = 1").await;
    assert_eq!(out, "name\tgrade\nJohn\tNULL");
}

#[tokio::test]
async fn test_select_where_on_unknown_field_matches_nothing() {
    let db = school_db();
    let out = run(&db, "SELECT name FROM student WHERE grade = 'A'").await;
    assert_eq!(out, "name");
}

#[tokio::test]
async fn test_select_text_against_number_matches_nothing() {
    let db = school_db();
    let out = run(&db, "SELECT name FROM student WHERE name > 5").await;
    assert_eq!(out, "name");
}

#[tokio::test]
async fn test_select_from_empty_table() {
    let mut mem = MemLoader::new();
    mem.create_table("empty", &["a", "b"]).unwrap();
    let db = Database::with_loader(mem);
    assert_eq!(run(&db, "SELECT a, b FROM empty").await, "a\tb");
}

#[tokio::test]
async fn test_query_result_serializes_as_json() {
    let db = emp_db();
    let result = db
        .query("SELECT dept, SUM(salary) FROM emp GROUP BY dept")
        .await
        .unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "columns": ["dept", "SUM(salary)"],
            "rows": [
                {"dept": "X", "SUM(salary)": 30},
                {"dept": "Y", "SUM(salary)": 5},
            ],
        })
    );
}

#[tokio::test]
async fn test_loader_mut_sees_new_rows() {
    let mut db = school_db();
    db.loader_mut()
        .insert_row("student", &["5", "Eve", "41"])
        .unwrap();
    let out = run(&db, "SELECT name FROM student WHERE age > 40").await;
    assert_eq!(out, "name\nEve");
}

#[test]
fn test_project_rows_keeps_only_requested_fields() {
    let rows = vec![row(&[("a", t("1")), ("b", t("2")), ("c", t("3"))])];
    let out = project_rows(&rows, &fields(&["c", "a", "z"]));
    assert_eq!(
        out,
        vec![row(&[("c", t("3")), ("a", t("1")), ("z", Value::Null)])]
    );
}
