use typegen_core::{ColumnResult, Engine, StreamError};

/// Source of per-table column metadata streams.
///
/// Each call opens a fresh, forward-only stream scoped to one table and
/// ordered by ascending ordinal. Failing to open the stream at all (unknown
/// table, unreachable source) is reported up front; failures while reading
/// are items of the stream.
pub trait ColumnProvider {
    type Columns<'a>: Iterator<Item = ColumnResult>
    where
        Self: 'a;

    /// Engine whose type names the provider reports.
    fn engine(&self) -> Engine;

    fn open_columns(&self, engine: Engine, table: &str) -> Result<Self::Columns<'_>, StreamError>;
}
