//! MyBatis CRUD mapper generation.
//!
//! Both mapper styles share the column classification and the SQL bodies
//! produced here; [`xml`] and [`annotation`] only differ in how statements
//! are wrapped.
//!
//! Columns fall into three sets:
//!
//! - selectable: every column
//! - insertable: not part of the primary key and not an audit column
//! - keys: primary key columns, in ordinal order
//!
//! Audit columns start with `insert_`, `update_` or `delete_` (any case) and
//! are written from fixed placeholders instead of the parameter object.
//!
//! Mapper, DTO and response names derive from the bare table name; the
//! request prefix and suffix do not apply.

mod annotation;
mod xml;

pub use annotation::MyBatisAnnotationEmitter;
pub use xml::MyBatisXmlEmitter;

use typegen_core::{ColumnDescriptor, to_pascal_case};

use crate::MyBatisOptions;
use crate::naming::field_name;

/// Entity name used in mapper, DTO and response type names.
fn entity_name(table: &str) -> String {
    to_pascal_case(table)
}

/// Name prefixes marking audit columns.
pub const AUDIT_PREFIXES: [&str; 3] = ["insert_", "update_", "delete_"];

const INSERT_AUDIT: [(&str, &str); 3] = [
    ("insert_ip", "#{insertIp}"),
    ("insert_user_id", "#{insertUserId}"),
    ("insert_dtm", "CURRENT_TIMESTAMP(6)"),
];

const UPDATE_AUDIT: [(&str, &str); 3] = [
    ("update_ip", "#{updateIp}"),
    ("update_user_id", "#{updateUserId}"),
    ("update_dtm", "CURRENT_TIMESTAMP(6)"),
];

/// Whether `name` carries an audit prefix, ignoring case.
pub fn is_audit_column(name: &str) -> bool {
    let name = name.to_lowercase();
    AUDIT_PREFIXES.iter().any(|prefix| name.starts_with(prefix))
}

/// Columns of one table, classified for statement generation.
#[derive(Debug, Clone, Default)]
pub struct ColumnSets {
    pub selectable: Vec<ColumnDescriptor>,
    pub insertable: Vec<ColumnDescriptor>,
    pub keys: Vec<ColumnDescriptor>,
}

impl ColumnSets {
    pub fn classify(columns: Vec<ColumnDescriptor>) -> Self {
        let keys = columns
            .iter()
            .filter(|c| c.is_primary_key)
            .cloned()
            .collect();
        let insertable = columns
            .iter()
            .filter(|c| !c.is_primary_key && !is_audit_column(&c.name))
            .cloned()
            .collect();

        Self {
            selectable: columns,
            insertable,
            keys,
        }
    }
}

/// One CRUD statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statement {
    Select,
    Insert,
    Update,
    Delete,
}

impl Statement {
    /// Statements requested by `options`, in CRUD order.
    pub fn selected(options: &MyBatisOptions) -> Vec<Statement> {
        [
            (Statement::Select, options.wants_select()),
            (Statement::Insert, options.wants_insert()),
            (Statement::Update, options.wants_update()),
            (Statement::Delete, options.wants_delete()),
        ]
        .into_iter()
        .filter_map(|(statement, wanted)| wanted.then_some(statement))
        .collect()
    }

    /// Lower-case verb, used for XML tags and statement ids.
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Insert => "insert",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    /// Statement id / method name, e.g. `selectUsers`.
    pub fn id(&self, type_name: &str) -> String {
        format!("{}{}", self.verb(), type_name)
    }

    /// SQL body lines with indentation relative to the statement keyword.
    pub fn sql(&self, table: &str, sets: &ColumnSets) -> Vec<String> {
        match self {
            Self::Select => select_sql(table, sets),
            Self::Insert => insert_sql(table, sets),
            Self::Update => update_sql(table, sets),
            Self::Delete => delete_sql(table, sets),
        }
    }
}

fn placeholder(column: &ColumnDescriptor) -> String {
    format!("#{{{}}}", field_name(&column.name))
}

/// `  item,` lines with no separator after the last item.
fn list<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
    I::IntoIter: ExactSizeIterator,
{
    let items = items.into_iter();
    let last = items.len().saturating_sub(1);
    items
        .enumerate()
        .map(|(i, item)| {
            let separator = if i < last { "," } else { "" };
            format!("  {}{}", item, separator)
        })
        .collect()
}

/// `WHERE TRUE` followed by one `AND col = #{field}` per key column.
fn where_clause(keys: &[ColumnDescriptor]) -> Vec<String> {
    let mut lines = vec!["WHERE TRUE".to_string()];
    lines.extend(
        keys.iter()
            .map(|key| format!("    AND {} = {}", key.name, placeholder(key))),
    );
    lines
}

fn select_sql(table: &str, sets: &ColumnSets) -> Vec<String> {
    let mut lines = vec!["SELECT".to_string()];
    if sets.selectable.is_empty() {
        lines.push("  *".to_string());
    } else {
        lines.extend(list(sets.selectable.iter().map(|c| c.name.clone())));
    }
    lines.push(format!("FROM {}", table));
    lines
}

fn insert_sql(table: &str, sets: &ColumnSets) -> Vec<String> {
    let columns: Vec<String> = sets
        .insertable
        .iter()
        .map(|c| c.name.clone())
        .chain(INSERT_AUDIT.iter().map(|(column, _)| column.to_string()))
        .collect();
    let values: Vec<String> = sets
        .insertable
        .iter()
        .map(placeholder)
        .chain(INSERT_AUDIT.iter().map(|(_, value)| value.to_string()))
        .collect();

    let mut lines = vec![format!("INSERT INTO {} (", table)];
    lines.extend(list(columns));
    lines.push(") VALUES (".to_string());
    lines.extend(list(values));
    lines.push(")".to_string());
    lines
}

fn update_sql(table: &str, sets: &ColumnSets) -> Vec<String> {
    let assignments: Vec<String> = sets
        .insertable
        .iter()
        .map(|c| format!("{} = {}", c.name, placeholder(c)))
        .chain(
            UPDATE_AUDIT
                .iter()
                .map(|(column, value)| format!("{} = {}", column, value)),
        )
        .collect();

    let mut lines = vec![format!("UPDATE {}", table), "SET".to_string()];
    lines.extend(list(assignments));
    lines.extend(where_clause(&sets.keys));
    lines
}

fn delete_sql(table: &str, sets: &ColumnSets) -> Vec<String> {
    let mut lines = vec!["DELETE".to_string(), format!("FROM {}", table)];
    lines.extend(where_clause(&sets.keys));
    lines
}
