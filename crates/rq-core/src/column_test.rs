use super::*;

#[test]
fn test_identifiers_reject_empty() {
    assert!(TableName::try_new("").is_none());
    assert!(ColumnName::try_new("").is_none());
    assert_eq!(TableName::try_new("t").unwrap(), "t");
}

#[test]
fn test_column_ref_deserializes_optional_table() {
    let bare: ColumnRef = serde_json::from_str(r#"{"name": "id"}"#).unwrap();
    assert_eq!(bare, ColumnRef::bare("id"));

    let null_table: ColumnRef = serde_json::from_str(r#"{"table": null, "name": "id"}"#).unwrap();
    assert_eq!(null_table, ColumnRef::bare("id"));

    let empty_table: ColumnRef = serde_json::from_str(r#"{"table": "", "name": "id"}"#).unwrap();
    assert_eq!(empty_table, ColumnRef::bare("id"));

    let qualified: ColumnRef = serde_json::from_str(r#"{"table": "t", "name": "id"}"#).unwrap();
    assert_eq!(qualified, ColumnRef::qualified("t", "id"));
}

#[test]
fn test_column_ref_rejects_empty_name() {
    assert!(serde_json::from_str::<ColumnRef>(r#"{"name": ""}"#).is_err());
}

#[test]
fn test_matches_respects_qualifier() {
    let column = ColumnDescriptor::new(
        TableName::new("orders"),
        ColumnName::new("id"),
        ColumnType::Int,
        0,
    );
    assert!(ColumnRef::bare("id").matches(&column));
    assert!(ColumnRef::qualified("orders", "id").matches(&column));
    assert!(!ColumnRef::qualified("users", "id").matches(&column));
    assert!(!ColumnRef::bare("total").matches(&column));
}

#[test]
fn test_display_forms() {
    assert_eq!(ColumnRef::bare("id").to_string(), "id");
    assert_eq!(ColumnRef::qualified("o", "id").to_string(), "o.id");
}
