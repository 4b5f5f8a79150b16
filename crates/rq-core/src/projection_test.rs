use super::*;
use crate::column::TableName;
use crate::join::cross_join;
use crate::value::{ColumnType, Value};

fn items() -> Relation {
    Relation::from_schema(
        &TableName::new("t"),
        [
            (ColumnName::new("id"), ColumnType::Int),
            (ColumnName::new("label"), ColumnType::Str),
        ],
        vec![
            Row::new(vec![Value::Int(1), Value::from("a")]),
            Row::new(vec![Value::Int(2), Value::from("b")]),
        ],
    )
    .unwrap()
}

#[test]
fn test_reorders_to_select_order() {
    let result = project(
        &items(),
        &[
            SelectItem::new(ColumnRef::bare("label")),
            SelectItem::new(ColumnRef::bare("id")),
        ],
    )
    .unwrap();

    assert_eq!(result.column_names(), vec!["label", "id"]);
    assert_eq!(result.len(), 2);
    assert_eq!(
        result.rows()[1].values(),
        &[Value::from("b"), Value::Int(2)]
    );
    let positions: Vec<usize> = result.columns().iter().map(|c| c.position).collect();
    assert_eq!(positions, vec![0, 1]);
}

#[test]
fn test_rename_and_qualifier_carry_through() {
    let result = project(
        &items(),
        &[SelectItem::renamed(ColumnRef::bare("id"), "x")],
    )
    .unwrap();
    let column = &result.columns()[0];
    assert_eq!(column.name, "x");
    assert_eq!(column.table, "t");
    assert_eq!(column.column_type, ColumnType::Int);
}

#[test]
fn test_subset_keeps_row_count() {
    let result = project(&items(), &[SelectItem::new(ColumnRef::bare("label"))]).unwrap();
    assert_eq!(result.len(), 2);
    assert_eq!(result.column_count(), 1);
}

#[test]
fn test_same_column_twice_needs_distinct_names() {
    let err = project(
        &items(),
        &[
            SelectItem::new(ColumnRef::bare("id")),
            SelectItem::new(ColumnRef::bare("id")),
        ],
    )
    .unwrap_err();
    assert_eq!(
        err,
        CoreError::DuplicateSelectName {
            name: "id".to_string()
        }
    );
    assert_eq!(err.component(), "select");

    let result = project(
        &items(),
        &[
            SelectItem::new(ColumnRef::bare("id")),
            SelectItem::renamed(ColumnRef::bare("id"), "id_again"),
        ],
    )
    .unwrap();
    assert_eq!(result.column_names(), vec!["id", "id_again"]);
}

#[test]
fn test_rename_colliding_with_other_column() {
    let err = project(
        &items(),
        &[
            SelectItem::new(ColumnRef::bare("id")),
            SelectItem::renamed(ColumnRef::bare("label"), "id"),
        ],
    )
    .unwrap_err();
    assert!(matches!(err, CoreError::DuplicateSelectName { .. }));
}

#[test]
fn test_resolution_errors_propagate() {
    let merged = cross_join(&items(), &items().alias(&TableName::new("u")));
    let err = project(&merged, &[SelectItem::new(ColumnRef::bare("id"))]).unwrap_err();
    assert!(matches!(err, CoreError::AmbiguousColumn { .. }));

    let err = project(&items(), &[SelectItem::new(ColumnRef::bare("nope"))]).unwrap_err();
    assert!(matches!(err, CoreError::ColumnNotFound { .. }));
}

#[test]
fn test_extracts_from_source_positions_after_join() {
    let merged = cross_join(&items(), &items().alias(&TableName::new("u")));
    let result = project(
        &merged,
        &[
            SelectItem::renamed(ColumnRef::qualified("u", "label"), "right_label"),
            SelectItem::renamed(ColumnRef::qualified("t", "id"), "left_id"),
        ],
    )
    .unwrap();
    assert_eq!(result.len(), 4);
    assert_eq!(result.rows()[1].values(), &[Value::from("b"), Value::Int(1)]);
    assert_eq!(result.columns()[0].table, "u");
}
