//! Zod schema emitter.

use typegen_codegen::builder::CodeBuilder;
use typegen_codegen::{EmitContext, Emitter, Result, Style};
use typegen_core::{ColumnDescriptor, ColumnResult, Ordered, TypeMapper};

use crate::ZodOptions;
use crate::ast::MethodChain;
use crate::naming::{comment_text, property_name};
use crate::type_mapper::ZodTypeMapper;

/// Emits a strict `z.object` schema per table.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZodEmitter;

impl ZodEmitter {
    /// Field expression. Call order is fixed: base, trim, max, then
    /// nullability.
    fn field_chain(column: &ColumnDescriptor, zod_type: &str, options: &ZodOptions) -> String {
        let is_string = zod_type == ZodTypeMapper::STRING;
        let max = column
            .max_length
            .filter(|_| options.max_value && is_string);

        let chain = MethodChain::new(format!("z.{}", zod_type))
            .call_if(options.trim && is_string, "trim")
            .call_with("max", max);

        let chain = if options.nullish {
            chain.call("nullish", &[])
        } else {
            chain
                .call_if(options.nullable || column.is_nullable(), "nullable")
                .call_if(options.all_optional, "optional")
        };

        chain.to_string()
    }
}

impl Emitter for ZodEmitter {
    type Options = ZodOptions;

    fn style(&self) -> Style {
        Style::Zod
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
        let name = &ctx.type_name;
        let mut builder = CodeBuilder::typescript();
        builder
            .push_line(&format!("export const {}Schema = z.object({{", name))
            .push_indent();

        while let Some(column) = ctx.next_column(&mut columns)? {
            let zod_type = ZodTypeMapper.map_type(ctx.engine, &column.raw_type);
            let mut line = format!(
                "{}: {},",
                property_name(&column.name),
                Self::field_chain(&column, &zod_type, options)
            );
            if options.comments
                && let Some(doc) = column.doc()
            {
                line.push_str(" // ");
                line.push_str(&comment_text(doc));
            }
            builder.push_line(&line);
        }

        let builder = builder
            .dedent()
            .line("}).strict();")
            .when(options.export_all_types, |b| {
                b.blank().line(&format!(
                    "export type {} = z.infer<typeof {}Schema>;",
                    name, name
                ))
            });

        Ok(builder.build())
    }
}
