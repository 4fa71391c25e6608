//! Test utilities for emitters.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use typegen_core::{ColumnDescriptor, ColumnResult, StreamError};

/// Wrap columns as a successful metadata stream.
pub fn stream(columns: Vec<ColumnDescriptor>) -> Vec<ColumnResult> {
    columns.into_iter().map(Ok).collect()
}

/// A stream yielding `columns` and then failing with a provider error.
pub fn failing_stream(columns: Vec<ColumnDescriptor>, message: &str) -> Vec<ColumnResult> {
    let mut items = stream(columns);
    items.push(Err(StreamError::Provider(message.to_string())));
    items
}

/// MySQL table `(id INT PK, created_at DATETIME NULL, name VARCHAR(50) NOT NULL)`.
pub fn mysql_users() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new(1, "id", "int")
            .primary_key()
            .comment("user id"),
        ColumnDescriptor::new(2, "created_at", "datetime").nullable(),
        ColumnDescriptor::new(3, "name", "varchar").max_length(50),
    ]
}

/// Postgres table with audit columns, a composite key and array/json types.
pub fn postgres_orders() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new(1, "order_id", "int8").primary_key(),
        ColumnDescriptor::new(2, "line_no", "int4").primary_key(),
        ColumnDescriptor::new(3, "sku", "varchar")
            .max_length(32)
            .comment("stock keeping unit"),
        ColumnDescriptor::new(4, "tags", "_text").nullable(),
        ColumnDescriptor::new(5, "payload", "jsonb").nullable(),
        ColumnDescriptor::new(6, "placed_at", "timestamptz"),
        ColumnDescriptor::new(7, "insert_user_id", "varchar"),
        ColumnDescriptor::new(8, "UPDATE_DTM", "timestamp").nullable(),
    ]
}

/// SQL Server table exercising value and reference types.
pub fn mssql_accounts() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new(1, "account_id", "uniqueidentifier").primary_key(),
        ColumnDescriptor::new(2, "balance", "money").nullable(),
        ColumnDescriptor::new(3, "display_name", "nvarchar")
            .nullable()
            .max_length(100),
        ColumnDescriptor::new(4, "opened_at", "datetimeoffset"),
    ]
}
