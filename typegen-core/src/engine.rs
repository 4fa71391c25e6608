//! Source database engines.

use std::{fmt, str::FromStr};

use serde::Deserialize;

/// Relational database dialect whose type names are mapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Engine {
    MySql,
    Postgres,
    SqlServer,
}

impl Engine {
    pub fn as_str(&self) -> &'static str {
        match self {
            Engine::MySql => "mysql",
            Engine::Postgres => "postgres",
            Engine::SqlServer => "mssql",
        }
    }

    /// Element type name of an engine-native array type, if `raw` is one.
    ///
    /// Postgres reports arrays either as `udt_name` with a leading underscore
    /// (`_int4`) or in SQL form with a trailing `[]` (`integer[]`).
    pub fn array_element<'a>(&self, raw: &'a str) -> Option<&'a str> {
        match self {
            Engine::Postgres => raw
                .strip_prefix('_')
                .or_else(|| raw.strip_suffix("[]"))
                .map(str::trim)
                .filter(|elem| !elem.is_empty()),
            Engine::MySql | Engine::SqlServer => None,
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Engine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mysql" | "mariadb" => Ok(Engine::MySql),
            "postgres" | "postgresql" | "pg" => Ok(Engine::Postgres),
            "mssql" | "sqlserver" | "sql_server" => Ok(Engine::SqlServer),
            _ => Err(format!(
                "unknown database engine '{}', expected 'mysql', 'postgres' or 'mssql'",
                s
            )),
        }
    }
}

impl TryFrom<String> for Engine {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
