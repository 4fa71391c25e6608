//! File-backed column metadata.
//!
//! A schema file is a TOML dump of `information_schema.columns` rows,
//! grouped by table:
//!
//! ```toml
//! engine = "mysql"
//!
//! [[tables.users]]
//! ordinal_position = 1
//! column_name = "id"
//! is_nullable = "NO"
//! data_type = "int"
//! column_key = "PRI"
//! column_comment = "user id"
//! ```
//!
//! Rows are only decoded when a table is opened, so a malformed row
//! surfaces as a [`StreamError::Scan`] at its position in the stream.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use typegen_core::{ColumnDescriptor, ColumnResult, Engine, Nullability, StreamError};

use crate::{ColumnProvider, Error, Result, SourceContext};

/// One raw metadata row, named after the `information_schema` columns.
#[derive(Debug, Deserialize)]
struct ColumnRow {
    ordinal_position: u32,
    column_name: String,
    #[serde(default)]
    is_nullable: Nullability,
    #[serde(default)]
    character_maximum_length: Option<u32>,
    data_type: String,
    #[serde(default)]
    column_key: String,
    #[serde(default)]
    column_comment: Option<String>,
}

impl From<ColumnRow> for ColumnDescriptor {
    fn from(row: ColumnRow) -> Self {
        let mut column = ColumnDescriptor::new(row.ordinal_position, row.column_name, row.data_type)
            .key_flag(&row.column_key);
        column.nullable = row.is_nullable;
        column.max_length = row.character_maximum_length;
        column.comment = row.column_comment;
        column
    }
}

#[derive(Debug, Deserialize)]
struct RawSchemaFile {
    engine: Engine,
    #[serde(default)]
    tables: IndexMap<String, Vec<toml::Value>>,
}

/// Column metadata for the tables of one database, read from TOML.
#[derive(Debug, Clone)]
pub struct SchemaFile {
    path: Option<PathBuf>,
    engine: Engine,
    tables: IndexMap<String, Vec<toml::Value>>,
}

impl SchemaFile {
    /// Open and parse a schema file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let mut schema = Self::from_str_with_filename(&content, &path.display().to_string())?;
        schema.path = Some(path.to_path_buf());
        Ok(schema)
    }

    /// Parse a schema file with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let raw: RawSchemaFile = toml::from_str(content).map_err(|e| ctx.toml_error(e))?;
        Ok(Self {
            path: None,
            engine: raw.engine,
            tables: raw.tables,
        })
    }

    /// Path the schema was read from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Table names in file order.
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }
}

impl std::str::FromStr for SchemaFile {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "schema.toml")
    }
}

impl ColumnProvider for SchemaFile {
    type Columns<'a> = SchemaColumns<'a>;

    fn engine(&self) -> Engine {
        self.engine
    }

    fn open_columns(
        &self,
        engine: Engine,
        table: &str,
    ) -> std::result::Result<SchemaColumns<'_>, StreamError> {
        if engine != self.engine {
            return Err(StreamError::Provider(format!(
                "schema describes a {} database, not {}",
                self.engine, engine
            )));
        }
        let rows = self
            .tables
            .get(table)
            .ok_or_else(|| StreamError::TableNotFound {
                table: table.to_string(),
            })?;
        Ok(SchemaColumns {
            rows: rows.iter().enumerate(),
        })
    }
}

/// Lazily decoded rows of one table.
#[derive(Debug)]
pub struct SchemaColumns<'a> {
    rows: std::iter::Enumerate<std::slice::Iter<'a, toml::Value>>,
}

impl Iterator for SchemaColumns<'_> {
    type Item = ColumnResult;

    fn next(&mut self) -> Option<Self::Item> {
        let (index, row) = self.rows.next()?;
        let column = row
            .clone()
            .try_into::<ColumnRow>()
            .map(ColumnDescriptor::from)
            .map_err(|e: toml::de::Error| StreamError::Scan {
                row: index + 1,
                message: e.message().to_string(),
            });
        Some(column)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    const USERS: &str = r#"
engine = "mysql"

[[tables.users]]
ordinal_position = 1
column_name = "id"
is_nullable = "NO"
data_type = "int"
column_key = "PRI"
column_comment = "user id"

[[tables.users]]
ordinal_position = 2
column_name = "created_at"
is_nullable = "YES"
data_type = "datetime"

[[tables.users]]
ordinal_position = 3
column_name = "name"
character_maximum_length = 50
data_type = "varchar"

[[tables.audit_log]]
ordinal_position = 1
column_name = "entry"
data_type = "text"
"#;

    #[test]
    fn test_open_columns_in_file_order() {
        let schema = SchemaFile::from_str(USERS).unwrap();
        assert_eq!(schema.engine(), Engine::MySql);
        assert_eq!(schema.table_names().collect::<Vec<_>>(), ["users", "audit_log"]);

        let columns: Vec<_> = schema
            .open_columns(Engine::MySql, "users")
            .unwrap()
            .collect::<std::result::Result<_, _>>()
            .unwrap();
        assert_eq!(
            columns,
            vec![
                ColumnDescriptor::new(1, "id", "int")
                    .primary_key()
                    .comment("user id"),
                ColumnDescriptor::new(2, "created_at", "datetime").nullable(),
                ColumnDescriptor::new(3, "name", "varchar").max_length(50),
            ]
        );
    }

    #[test]
    fn test_missing_table() {
        let schema = SchemaFile::from_str(USERS).unwrap();
        let err = schema.open_columns(Engine::MySql, "orders").unwrap_err();
        assert_eq!(
            err,
            StreamError::TableNotFound {
                table: "orders".into()
            }
        );
    }

    #[test]
    fn test_engine_mismatch() {
        let schema = SchemaFile::from_str(USERS).unwrap();
        let err = schema.open_columns(Engine::Postgres, "users").unwrap_err();
        assert!(matches!(err, StreamError::Provider(_)));
    }

    #[test]
    fn test_malformed_row_fails_when_reached() {
        let schema = SchemaFile::from_str(
            r#"
engine = "postgres"

[[tables.orders]]
ordinal_position = 1
column_name = "order_id"
data_type = "int8"

[[tables.orders]]
ordinal_position = 2
column_name = "status"
is_nullable = "SOMETIMES"
data_type = "text"
"#,
        )
        .unwrap();

        let mut columns = schema.open_columns(Engine::Postgres, "orders").unwrap();
        assert!(columns.next().unwrap().is_ok());
        match columns.next().unwrap() {
            Err(StreamError::Scan { row, message }) => {
                assert_eq!(row, 2);
                assert!(message.contains("SOMETIMES"));
            }
            other => panic!("unexpected item: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_engine_is_parse_error() {
        let err = SchemaFile::from_str("engine = \"oracle\"").unwrap_err();
        match *err {
            Error::Parse { message, .. } => assert!(message.contains("oracle")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_open_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.toml");
        std::fs::write(&path, USERS).unwrap();

        let schema = SchemaFile::open(&path).unwrap();
        assert_eq!(schema.path(), Some(path.as_path()));
        assert_eq!(
            schema
                .open_columns(Engine::MySql, "audit_log")
                .unwrap()
                .count(),
            1
        );
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SchemaFile::open(dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
