use super::*;

fn csv_db(tables: &[(&str, &str)]) -> Database {
    let dir = temp_dir();
    for (name, body) in tables {
        std::fs::write(dir.join(format!("{name}.csv")), body).unwrap();
    }
    Database::open(dir)
}

const STUDENT_CSV: &str = "id,name,age\n1,John,30\n2,Jane,25\n3,Bob,22\n4,Alice,24\n";
const ENROLLMENT_CSV: &str =
    "student_id,course\n1,Mathematics\n1,Physics\n2,Chemistry\n3,Mathematics\n5,Biology\n";

#[tokio::test]
async fn test_csv_select_where() {
    let db = csv_db(&[("student", STUDENT_CSV)]);
    let out = run(&db, "SELECT id, name FROM student WHERE age < 25").await;
    assert_eq!(out, "id\tname\n3\tBob\n4\tAlice");
}

#[tokio::test]
async fn test_csv_left_join() {
    let db = csv_db(&[("student", STUDENT_CSV), ("enrollment", ENROLLMENT_CSV)]);
    let out = run(
        &db,
        "SELECT student.name, enrollment.course FROM student LEFT JOIN enrollment ON student.id = enrollment.student_id",
    )
    .await;
    assert_eq!(
        out,
        "student.name\tenrollment.course\nJohn\tMathematics\nJohn\tPhysics\nJane\tChemistry\nBob\tMathematics\nAlice\tNULL"
    );
}

#[tokio::test]
async fn test_csv_right_join_with_header_only_main_table() {
    let db = csv_db(&[("student", "id,name,age\n"), ("enrollment", ENROLLMENT_CSV)]);
    let rows = db
        .execute("SELECT student.name, enrollment.course FROM student RIGHT JOIN enrollment ON student.id = enrollment.student_id")
        .await
        .unwrap();
    assert_eq!(rows.len(), 5);
    assert!(rows.iter().all(|r| r.get("student.name") == Some(&Value::Null)));
    assert_eq!(rows[4].get("enrollment.course"), Some(&t("Biology")));
}

#[tokio::test]
async fn test_csv_group_by_average() {
    let db = csv_db(&[(
        "emp",
        "name,dept,salary\nann,X,10\nbob,X,20\ncid,Y,5\ndan,Y,\n",
    )]);
    let out = run(
        &db,
        "SELECT dept, COUNT(*), COUNT(salary), AVG(salary) FROM emp GROUP BY dept",
    )
    .await;
    // An empty cell is non-null text, so it counts toward AVG's divisor.
    assert_eq!(
        out,
        "dept\tCOUNT(*)\tCOUNT(salary)\tAVG(salary)\nX\t2\t2\t15\nY\t2\t2\t2.5"
    );
}

#[tokio::test]
async fn test_csv_missing_table_file() {
    let db = csv_db(&[]);
    let err = run_err(&db, "SELECT a FROM ghost").await;
    assert!(matches!(err, QueryError::TableNotFound(_)));
}

#[tokio::test]
async fn test_open_keeps_data_dir() {
    let dir = temp_dir();
    let db = Database::open(&dir);
    assert_eq!(db.path(), dir.as_path());
}
