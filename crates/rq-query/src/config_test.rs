use super::*;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.table_dir, PathBuf::from("."));
    assert_eq!(config.table_extension, ".table.json");
}

#[test]
fn test_parse_partial_config() {
    let config: Config = serde_yaml::from_str("table_extension: .json").unwrap();
    assert_eq!(config.table_extension, ".json");
    assert_eq!(config.table_dir, PathBuf::from("."));
}

#[test]
fn test_unknown_fields_rejected() {
    assert!(serde_yaml::from_str::<Config>("tables: data").is_err());
}

#[test]
fn test_load_resolves_relative_dir_against_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "table_dir: data\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.table_dir, dir.path().join("data"));
}

#[test]
fn test_load_keeps_absolute_dir() {
    let dir = tempfile::tempdir().unwrap();
    let tables = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, format!("table_dir: {}\n", tables.path().display())).unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.table_dir, tables.path());
}

#[test]
fn test_empty_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.table_extension, ".table.json");
    assert_eq!(config.table_dir, dir.path().join("."));
}

#[test]
fn test_missing_explicit_config() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(&dir.path().join("absent.yml")).unwrap_err();
    assert!(matches!(err, QueryError::ConfigNotFound { .. }));
    assert!(err.is_usage_error());
}

#[test]
fn test_invalid_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "table_dir: [unclosed").unwrap();
    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, QueryError::ConfigParse { .. }));
    assert_eq!(err.component(), "config");
}

#[test]
fn test_discover_next_to_query() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(CONFIG_FILE_NAME), "table_extension: .tbl\n").unwrap();
    let config = Config::discover(&dir.path().join("query.json")).unwrap();
    assert_eq!(config.table_extension, ".tbl");
}

#[test]
fn test_discover_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::discover(&dir.path().join("query.json")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_table_source_uses_config() {
    let config = Config {
        table_dir: PathBuf::from("/data"),
        table_extension: ".json".to_string(),
    };
    let path = config.table_source().path_for(&rq_core::TableName::new("t"));
    assert_eq!(path, PathBuf::from("/data/t.json"));
}
