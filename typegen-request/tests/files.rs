use std::fs;

use serde_json::json;
use typegen_core::Engine;
use typegen_request::{ColumnProvider, Error, GenerationRequest, SchemaFile};

#[test]
fn test_request_format_follows_extension() {
    let dir = tempfile::tempdir().unwrap();

    let json_path = dir.path().join("request.json");
    fs::write(
        &json_path,
        r#"{"language": "java", "style": "mybatis-xml", "tableNames": ["orders"], "options": {"allCrud": true}}"#,
    )
    .unwrap();
    let from_json = GenerationRequest::from_file(&json_path).unwrap();

    let toml_path = dir.path().join("request.toml");
    fs::write(
        &toml_path,
        r#"
language = "java"
style = "mybatis-xml"
tableNames = ["orders"]
options = { allCrud = true }
"#,
    )
    .unwrap();
    let from_toml = GenerationRequest::from_file(&toml_path).unwrap();

    assert_eq!(from_json, from_toml);
    assert_eq!(from_toml.options, json!({"allCrud": true}));
}

#[test]
fn test_toml_content_in_json_file_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("request.json");
    fs::write(&path, "language = \"java\"\n").unwrap();

    let err = GenerationRequest::from_file(&path).unwrap_err();
    match *err {
        Error::Parse { filename, .. } => assert!(filename.ends_with("request.json")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_missing_request_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = GenerationRequest::from_file(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(*err, Error::Io { .. }));
}

#[test]
fn test_schema_file_streams_each_table_fresh() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schema.toml");
    fs::write(
        &path,
        r#"
engine = "mssql"

[[tables.accounts]]
ordinal_position = 1
column_name = "account_id"
data_type = "uniqueidentifier"
column_key = "PRI"

[[tables.accounts]]
ordinal_position = 2
column_name = "balance"
is_nullable = "YES"
data_type = "money"
"#,
    )
    .unwrap();

    let schema = SchemaFile::open(&path).unwrap();
    for _ in 0..2 {
        let columns: Vec<_> = schema
            .open_columns(Engine::SqlServer, "accounts")
            .unwrap()
            .map(|c| c.unwrap())
            .collect();
        assert_eq!(columns.len(), 2);
        assert!(columns[0].is_primary_key);
        assert!(columns[1].is_nullable());
    }
}
