use rowql_core::engine::format_result;
use rowql_core::parser::command::{CompareOp, FieldSpec, JoinCondition, WhereClause};
use rowql_core::storage::{MemLoader, Table, TableLoader};
use rowql_core::types::{Row, Value};
use rowql_core::{Database, QueryError};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

fn temp_dir() -> PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let mut path: PathBuf = std::env::temp_dir();
    path.push(format!("rowql_test_{}_{}", std::process::id(), id));
    let _ = std::fs::remove_dir_all(&path);
    std::fs::create_dir_all(&path).unwrap();
    path
}

fn seed_student(mem: &mut MemLoader) {
    mem.create_table("student", &["id", "name", "age"]).unwrap();
    mem.insert_row("student", &["1", "John", "30"]).unwrap();
    mem.insert_row("student", &["2", "Jane", "25"]).unwrap();
    mem.insert_row("student", &["3", "Bob", "22"]).unwrap();
    mem.insert_row("student", &["4", "Alice", "24"]).unwrap();
}

fn seed_enrollment(mem: &mut MemLoader) {
    mem.create_table("enrollment", &["student_id", "course"]).unwrap();
    mem.insert_row("enrollment", &["1", "Mathematics"]).unwrap();
    mem.insert_row("enrollment", &["1", "Physics"]).unwrap();
    mem.insert_row("enrollment", &["2", "Chemistry"]).unwrap();
    mem.insert_row("enrollment", &["3", "Mathematics"]).unwrap();
    mem.insert_row("enrollment", &["5", "Biology"]).unwrap();
}

fn school_db() -> Database<MemLoader> {
    let mut mem = MemLoader::new();
    seed_student(&mut mem);
    seed_enrollment(&mut mem);
    Database::with_loader(mem)
}

fn emp_db() -> Database<MemLoader> {
    let mut mem = MemLoader::new();
    mem.create_table("emp", &["name", "dept", "salary"]).unwrap();
    mem.insert_row("emp", &["ann", "X", "10"]).unwrap();
    mem.insert_row("emp", &["bob", "X", "20"]).unwrap();
    mem.insert_row("emp", &["cid", "Y", "5"]).unwrap();
    Database::with_loader(mem)
}

async fn run<L: TableLoader>(db: &Database<L>, sql: &str) -> String {
    let result = db
        .query(sql)
        .await
        .unwrap_or_else(|e| panic!("query {sql:?} failed: {e}"));
    format_result(&result)
}

async fn run_err<L: TableLoader>(db: &Database<L>, sql: &str) -> QueryError {
    match db.execute(sql).await {
        Ok(rows) => panic!("expected {sql:?} to fail, got {rows:?}"),
        Err(e) => e,
    }
}

fn t(s: &str) -> Value {
    Value::from(s)
}

fn row(pairs: &[(&str, Value)]) -> Row {
    pairs.iter().cloned().collect()
}

fn fields(list: &[&str]) -> Vec<FieldSpec> {
    list.iter().map(|f| FieldSpec::parse(f)).collect()
}

fn clause(field: &str, op: CompareOp, value: &str) -> WhereClause {
    WhereClause {
        field: field.to_string(),
        op,
        value: value.to_string(),
    }
}

fn on(left: &str, right: &str) -> JoinCondition {
    JoinCondition {
        left: left.to_string(),
        right: right.to_string(),
    }
}

mod csv_tables;
mod select;
