use super::*;
use crate::column::TableName;

#[derive(Debug, Deserialize)]
struct Named {
    #[serde(default, deserialize_with = "empty_as_none")]
    name: Option<TableName>,
}

#[derive(Debug, Deserialize)]
struct Listed {
    #[serde(default, deserialize_with = "null_as_default")]
    items: Vec<i64>,
}

#[test]
fn test_empty_as_none() {
    let parsed: Named = serde_json::from_str(r#"{"name": ""}"#).unwrap();
    assert_eq!(parsed.name, None);

    let parsed: Named = serde_json::from_str(r#"{"name": null}"#).unwrap();
    assert_eq!(parsed.name, None);

    let parsed: Named = serde_json::from_str("{}").unwrap();
    assert_eq!(parsed.name, None);

    let parsed: Named = serde_json::from_str(r#"{"name": "o"}"#).unwrap();
    assert_eq!(parsed.name, Some(TableName::new("o")));
}

#[test]
fn test_empty_as_none_rejects_wrong_type() {
    assert!(serde_json::from_str::<Named>(r#"{"name": 3}"#).is_err());
}

#[test]
fn test_null_as_default() {
    let parsed: Listed = serde_json::from_str(r#"{"items": null}"#).unwrap();
    assert!(parsed.items.is_empty());

    let parsed: Listed = serde_json::from_str("{}").unwrap();
    assert!(parsed.items.is_empty());

    let parsed: Listed = serde_json::from_str(r#"{"items": [1, 2]}"#).unwrap();
    assert_eq!(parsed.items, vec![1, 2]);
}
