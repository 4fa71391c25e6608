//! Column metadata model.

use std::{fmt, str::FromStr};

use serde::Deserialize;
use thiserror::Error;

/// Whether a column accepts `NULL`, as reported by `information_schema`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Nullability {
    /// `IS_NULLABLE = 'YES'`
    Yes,
    /// `IS_NULLABLE = 'NO'`
    #[default]
    No,
}

impl Nullability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Nullability::Yes => "YES",
            Nullability::No => "NO",
        }
    }

    pub fn is_nullable(&self) -> bool {
        matches!(self, Nullability::Yes)
    }
}

impl fmt::Display for Nullability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Nullability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("yes") {
            Ok(Nullability::Yes)
        } else if s.eq_ignore_ascii_case("no") {
            Ok(Nullability::No)
        } else {
            Err(format!("invalid nullability '{}', expected 'YES' or 'NO'", s))
        }
    }
}

impl TryFrom<String> for Nullability {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<bool> for Nullability {
    fn from(nullable: bool) -> Self {
        if nullable {
            Nullability::Yes
        } else {
            Nullability::No
        }
    }
}

/// Canonical descriptor of one table column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    /// 1-based position within the table.
    pub ordinal: u32,
    /// Column name as stored in the database.
    pub name: String,
    pub nullable: Nullability,
    /// `CHARACTER_MAXIMUM_LENGTH`, if the engine reports one.
    pub max_length: Option<u32>,
    /// Engine-specific type name (e.g. `varchar`, `_int4`, `datetimeoffset`).
    pub raw_type: String,
    pub is_primary_key: bool,
    pub comment: Option<String>,
}

impl ColumnDescriptor {
    pub fn new(ordinal: u32, name: impl Into<String>, raw_type: impl Into<String>) -> Self {
        Self {
            ordinal,
            name: name.into(),
            nullable: Nullability::No,
            max_length: None,
            raw_type: raw_type.into(),
            is_primary_key: false,
            comment: None,
        }
    }

    /// Mark the column as nullable.
    pub fn nullable(mut self) -> Self {
        self.nullable = Nullability::Yes;
        self
    }

    /// Mark the column as part of the primary key.
    pub fn primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self
    }

    pub fn max_length(mut self, len: u32) -> Self {
        self.max_length = Some(len);
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Derive the primary key flag from an engine key string (`PRI`, `UNI`, `MUL`, ...).
    pub fn key_flag(mut self, column_key: &str) -> Self {
        self.is_primary_key = column_key.contains("PRI");
        self
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable.is_nullable()
    }

    /// The column comment, if present and not blank.
    pub fn doc(&self) -> Option<&str> {
        self.comment
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}

/// Failure while reading column metadata from a provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StreamError {
    #[error("failed to scan column row {row}: {message}")]
    Scan { row: usize, message: String },

    #[error("column ordinal {found} does not follow {previous}")]
    OutOfOrder { previous: u32, found: u32 },

    #[error("table '{table}' not found")]
    TableNotFound { table: String },

    #[error("{0}")]
    Provider(String),
}

/// One item of a column metadata stream.
pub type ColumnResult = Result<ColumnDescriptor, StreamError>;

/// Stream adapter enforcing strictly increasing, 1-based ordinals.
///
/// After the first error the stream is exhausted.
#[derive(Debug)]
pub struct Ordered<I> {
    inner: I,
    previous: u32,
    failed: bool,
}

impl<I> Iterator for Ordered<I>
where
    I: Iterator<Item = ColumnResult>,
{
    type Item = ColumnResult;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let item = match self.inner.next()? {
            Ok(column) if column.ordinal <= self.previous => Err(StreamError::OutOfOrder {
                previous: self.previous,
                found: column.ordinal,
            }),
            Ok(column) => {
                self.previous = column.ordinal;
                Ok(column)
            }
            Err(e) => Err(e),
        };

        self.failed = item.is_err();
        Some(item)
    }
}

/// Wrap a column stream so ordinal order violations surface as errors.
pub fn ordered<I>(columns: I) -> Ordered<I::IntoIter>
where
    I: IntoIterator<Item = ColumnResult>,
{
    Ordered {
        inner: columns.into_iter(),
        previous: 0,
        failed: false,
    }
}
