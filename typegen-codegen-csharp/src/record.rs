//! C# record emitter.

use typegen_codegen::{EmitContext, Emitter, Result, Style};
use typegen_core::{ColumnResult, Ordered};

use crate::CSharpRecordOptions;
use crate::ast::{Attribute, Member, Parameter, PositionalRecord, TypeDecl};
use crate::dto::column_type;
use crate::naming::property_name;

/// Emits one record per table, positional or with a property body.
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpRecordEmitter;

impl Emitter for CSharpRecordEmitter {
    type Options = CSharpRecordOptions;

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
        let accessor = if options.with_init { "init" } else { "set" };
        let mut positional = PositionalRecord::new(&ctx.type_name);
        let mut body = TypeDecl::record(&ctx.type_name);
        if options.extra_spacing {
            positional = positional.spaced();
            body = body.spaced();
        }

        while let Some(column) = ctx.next_column(&mut columns)? {
            let ty = column_type(&column, ctx.engine, options.nullable);
            let name = property_name(&column.name, options.camel_case_properties);
            let attribute = options
                .json_property_name
                .then(|| Attribute::json_property_name(&column.name));

            if options.positional {
                let mut parameter = Parameter::new(ty, name);
                if let Some(attribute) = attribute {
                    parameter = parameter.attribute(attribute);
                }
                positional = positional.parameter(parameter);
            } else {
                let mut member =
                    Member::new(format!("public {} {} {{ get; {}; }}", ty, name, accessor));
                if let Some(attribute) = attribute {
                    member = member.attribute(attribute);
                }
                body = body.member(member);
            }
        }

        if options.positional {
            Ok(positional.build())
        } else {
            Ok(body.build())
        }
    }
}
