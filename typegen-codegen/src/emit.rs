//! The generation contract shared by every emitter.

use serde::de::DeserializeOwned;
use serde_json::Value;
use typegen_core::{ColumnDescriptor, ColumnResult, Engine, Ordered, ordered, type_name};

use crate::{Error, Result, Style, decode_options};

/// Everything an emitter knows about the unit it is producing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitContext {
    /// Table name as requested.
    pub table: String,
    /// `prefix + PascalCase(table) + suffix`.
    pub type_name: String,
    pub engine: Engine,
}

impl EmitContext {
    pub fn new(table: impl Into<String>, engine: Engine) -> Self {
        Self::with_affixes(table, engine, "", "")
    }

    pub fn with_affixes(
        table: impl Into<String>,
        engine: Engine,
        prefix: &str,
        suffix: &str,
    ) -> Self {
        let table = table.into();
        Self {
            type_name: type_name(prefix, &table, suffix),
            table,
            engine,
        }
    }

    /// Pull the next column, converting stream failures into [`Error::Stream`].
    pub fn next_column<I>(&self, columns: &mut Ordered<I>) -> Result<Option<ColumnDescriptor>>
    where
        I: Iterator<Item = ColumnResult>,
    {
        columns
            .next()
            .transpose()
            .map_err(|e| Error::stream(&self.table, e))
    }
}

/// Implementation of the generation contract for one (language, style) pair.
///
/// Emitters hold no state across invocations: output is a pure function
/// of the column stream, the decoded options and the context.
pub trait Emitter {
    /// Typed option flags for this style.
    type Options: DeserializeOwned + Default;

    /// Style this emitter produces, used in option errors.
    fn style(&self) -> Style;

    /// Produce the unit from already decoded options.
    ///
    /// Any stream error must abort with [`Error::Stream`]; partial output is discarded.
    fn emit<I>(
        &self,
        columns: Ordered<I>,
        ctx: &EmitContext,
        options: &Self::Options,
    ) -> Result<String>
    where
        I: Iterator<Item = ColumnResult>;

    /// Decode a raw options payload for this style.
    fn decode(&self, options: &Value) -> Result<Self::Options> {
        decode_options(self.style().as_str(), options)
    }

    /// Decode `options`, then emit. Options are validated before any row is read.
    fn generate<I>(&self, columns: I, ctx: &EmitContext, options: &Value) -> Result<String>
    where
        I: IntoIterator<Item = ColumnResult>,
    {
        let options = self.decode(options)?;
        self.emit(ordered(columns), ctx, &options)
    }
}

/// Drain a column stream completely, failing on the first stream error.
///
/// Used by styles that need every column before writing (positional
/// records, mapper statements).
pub fn drain<I>(columns: Ordered<I>, ctx: &EmitContext) -> Result<Vec<ColumnDescriptor>>
where
    I: Iterator<Item = ColumnResult>,
{
    columns
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::stream(&ctx.table, e))
}

#[cfg(test)]
mod tests {
    use typegen_core::StreamError;

    use super::*;

    #[test]
    fn test_context_type_name() {
        let ctx = EmitContext::with_affixes("order_item", Engine::MySql, "Api", "Dto");
        assert_eq!(ctx.type_name, "ApiOrderItemDto");
        assert_eq!(ctx.table, "order_item");
    }

    #[test]
    fn test_drain_collects_in_order() {
        let ctx = EmitContext::new("users", Engine::MySql);
        let cols = vec![
            Ok(ColumnDescriptor::new(1, "id", "int")),
            Ok(ColumnDescriptor::new(2, "name", "varchar")),
        ];
        let drained = drain(ordered(cols), &ctx).unwrap();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[1].name, "name");
    }

    #[test]
    fn test_drain_surfaces_late_error() {
        let ctx = EmitContext::new("users", Engine::MySql);
        let cols = vec![
            Ok(ColumnDescriptor::new(1, "id", "int")),
            Err(StreamError::Provider("cursor closed".into())),
        ];
        let err = drain(ordered(cols), &ctx).unwrap_err();
        match err {
            Error::Stream { table, source } => {
                assert_eq!(table, "users");
                assert_eq!(source, StreamError::Provider("cursor closed".into()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_next_column() {
        let ctx = EmitContext::new("users", Engine::Postgres);
        let mut cols = ordered(vec![Ok(ColumnDescriptor::new(1, "id", "int4"))]);
        assert!(ctx.next_column(&mut cols).unwrap().is_some());
        assert!(ctx.next_column(&mut cols).unwrap().is_none());
    }
}
