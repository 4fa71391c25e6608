//! Java `record` emitter.

use typegen_codegen::{EmitContext, Emitter, Result, Style};
use typegen_core::{ColumnResult, Ordered};

use crate::JavaRecordOptions;
use crate::ast::{Annotation, Record};
use crate::dto::column_field;

/// Emits one positional record per table.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaRecordEmitter;

impl Emitter for JavaRecordEmitter {
    type Options = JavaRecordOptions;

    fn style(&self) -> Style {
        Style::Record
    }

    fn emit<I>(
        &self,
        mut columns: Ordered<I>,
        ctx: &EmitContext,
        options: &Self::Options,
    ) -> Result<String>
    where
        I: Iterator<Item = ColumnResult>,
    {
        let mut record = Record::new(&ctx.type_name);
        if options.builder {
            record = record.annotation(Annotation::Builder);
        }
        if options.extra_spacing {
            record = record.spaced();
        }

        while let Some(column) = ctx.next_column(&mut columns)? {
            record = record.component(column_field(
                &column,
                ctx.engine,
                options.swagger_annotations,
                options.jackson_annotations,
            ));
        }

        Ok(record.build())
    }
}
