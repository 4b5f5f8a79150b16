use super::*;
use rq_core::{ColumnName, ColumnType, Row, Value};
use std::cell::Cell;

fn write_table(dir: &Path, file_name: &str, content: &str) {
    std::fs::write(dir.join(file_name), content).unwrap();
}

/// Counts how often the wrapped source is actually hit.
struct CountingSource {
    inner: HashMap<TableName, Relation>,
    loads: Cell<usize>,
}

impl TableSource for CountingSource {
    fn load(&self, name: &TableName) -> QueryResult<Relation> {
        self.loads.set(self.loads.get() + 1);
        self.inner.load(name)
    }
}

fn counting() -> CountingSource {
    let name = TableName::new("t");
    let relation = Relation::from_schema(
        &name,
        [(ColumnName::new("v"), ColumnType::Int)],
        vec![Row::new(vec![Value::Int(1)])],
    )
    .unwrap();
    CountingSource {
        inner: HashMap::from([(name, relation)]),
        loads: Cell::new(0),
    }
}

#[test]
fn test_file_source_reads_table() {
    let dir = tempfile::tempdir().unwrap();
    write_table(dir.path(), "t.table.json", r#"[[["id", "int"]], [1], [2]]"#);

    let source = FileTableSource::in_dir(dir.path());
    let relation = source.load(&TableName::new("t")).unwrap();
    assert_eq!(relation.len(), 2);
    assert_eq!(relation.columns()[0].table, "t");
}

#[test]
fn test_file_source_custom_extension() {
    let dir = tempfile::tempdir().unwrap();
    write_table(dir.path(), "t.json", r#"[[["id", "int"]]]"#);

    let source = FileTableSource::new(dir.path(), ".json");
    assert_eq!(source.path_for(&TableName::new("t")), dir.path().join("t.json"));
    assert!(source.load(&TableName::new("t")).is_ok());
}

#[test]
fn test_missing_table_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = FileTableSource::in_dir(dir.path())
        .load(&TableName::new("ghost"))
        .unwrap_err();
    assert!(matches!(err, QueryError::TableNotFound { .. }));
    assert!(err.to_string().contains("table:ghost does not exist"));
    assert_eq!(err.component(), "load");
}

#[test]
fn test_malformed_table_file() {
    let dir = tempfile::tempdir().unwrap();
    write_table(dir.path(), "bad.table.json", "not json");
    let err = FileTableSource::in_dir(dir.path())
        .load(&TableName::new("bad"))
        .unwrap_err();
    assert!(matches!(err, QueryError::TableParse { .. }));
}

#[test]
fn test_loader_caches_by_source_name() {
    let mut loader = TableLoader::new(counting());
    let name = TableName::new("t");

    let first = loader.load_or_get(&name).unwrap();
    let second = loader.load_or_get(&name).unwrap();
    assert_eq!(first, second);
    assert_eq!(loader.source().loads.get(), 1);
    assert_eq!(loader.cached_len(), 1);
}

#[test]
fn test_loader_does_not_cache_failures() {
    let mut loader = TableLoader::new(counting());
    let missing = TableName::new("missing");
    assert!(loader.load_or_get(&missing).is_err());
    assert!(loader.load_or_get(&missing).is_err());
    assert_eq!(loader.source().loads.get(), 2);
    assert_eq!(loader.cached_len(), 0);
}

#[test]
fn test_borrowed_source() {
    let source = counting();
    let mut loader = TableLoader::new(&source);
    loader.load_or_get(&TableName::new("t")).unwrap();
    assert_eq!(source.loads.get(), 1);
}
