use super::*;
use rq_core::{ColumnName, ColumnType, TableName, Value};

fn sample() -> Relation {
    Relation::from_schema(
        &TableName::new("t"),
        [
            (ColumnName::new("x"), ColumnType::Int),
            (ColumnName::new("label"), ColumnType::Str),
        ],
        vec![
            Row::new(vec![Value::Int(2), Value::from("b")]),
            Row::new(vec![Value::Int(300), Value::from("c")]),
        ],
    )
    .unwrap()
}

#[test]
fn test_table_layout() {
    let expected = "\
x   | label
-----------
2   |     b
300 |     c";
    assert_eq!(render_table(&sample()), expected);
}

#[test]
fn test_table_without_rows() {
    let empty = Relation::from_schema(
        &TableName::new("t"),
        [(ColumnName::new("id"), ColumnType::Int)],
        vec![],
    )
    .unwrap();
    assert_eq!(render_table(&empty), "id\n--");
}

#[test]
fn test_single_column_is_right_aligned() {
    let relation = Relation::from_schema(
        &TableName::new("t"),
        [(ColumnName::new("n"), ColumnType::Int)],
        vec![Row::new(vec![Value::Int(10)])],
    )
    .unwrap();
    assert_eq!(render_table(&relation), " n\n--\n10");
}

#[test]
fn test_json_output() {
    let json = render_json(&sample()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(
        parsed,
        serde_json::json!({
            "columns": ["x", "label"],
            "rows": [[2, "b"], [300, "c"]]
        })
    );
}
