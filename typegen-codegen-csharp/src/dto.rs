//! C# DTO class emitter.

use typegen_codegen::{EmitContext, Emitter, Result, Style};
use typegen_core::{ColumnDescriptor, ColumnResult, Engine, Ordered, TypeMapper};

use crate::CSharpDtoOptions;
use crate::ast::{Attribute, Member, TypeDecl};
use crate::naming::property_name;
use crate::nullability::make_nullable;
use crate::type_mapper::CSharpTypeMapper;

/// Mapped type of a column, marked nullable when requested and allowed.
pub(crate) fn column_type(column: &ColumnDescriptor, engine: Engine, nullable: bool) -> String {
    let ty = CSharpTypeMapper.map_type(engine, &column.raw_type);
    if nullable && column.is_nullable() {
        make_nullable(&ty)
    } else {
        ty
    }
}

/// Emits one C# class per table.
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpDtoEmitter;

impl CSharpDtoEmitter {
    fn member(column: &ColumnDescriptor, engine: Engine, options: &CSharpDtoOptions) -> Member {
        let ty = column_type(column, engine, options.nullable);
        let name = property_name(&column.name, options.camel_case_properties);

        let declaration = match (options.getter, options.setter) {
            (false, false) => format!("public {} {};", ty, name),
            (true, false) => format!("public {} {} {{ get; }}", ty, name),
            (_, true) => format!("public {} {} {{ get; set; }}", ty, name),
        };

        let member = Member::new(declaration);
        if options.json_property_name {
            member.attribute(Attribute::json_property_name(&column.name))
        } else {
            member
        }
    }
}

impl Emitter for CSharpDtoEmitter {
    type Options = CSharpDtoOptions;

    fn style(&self) -> Style {
        Style::Dto
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
        let mut class = TypeDecl::class(&ctx.type_name);
        if options.extra_spacing {
            class = class.spaced();
        }

        while let Some(column) = ctx.next_column(&mut columns)? {
            class = class.member(Self::member(&column, ctx.engine, options));
        }

        Ok(class.build())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use typegen_codegen::testing::{mssql_accounts, stream};

    use super::*;

    fn generate(options: Value) -> String {
        let ctx = EmitContext::new("accounts", Engine::SqlServer);
        CSharpDtoEmitter
            .generate(stream(mssql_accounts()), &ctx, &options)
            .unwrap()
    }

    #[test]
    fn test_public_fields_without_accessors() {
        let out = generate(Value::Null);
        assert_eq!(
            out,
            "public class Accounts\n{\n    public Guid AccountId;\n    public decimal Balance;\n    public string DisplayName;\n    public DateTimeOffset OpenedAt;\n}\n"
        );
    }

    #[test]
    fn test_accessors() {
        let out = generate(json!({"getter": true}));
        assert!(out.contains("    public Guid AccountId { get; }\n"));

        let out = generate(json!({"getter": true, "setter": true}));
        assert!(out.contains("    public Guid AccountId { get; set; }\n"));

        let out = generate(json!({"setter": true}));
        assert!(out.contains("    public Guid AccountId { get; set; }\n"));
    }

    #[test]
    fn test_nullable_marks_only_nullable_columns() {
        let out = generate(json!({"nullable": true, "getter": true, "setter": true}));
        assert!(out.contains("    public decimal? Balance { get; set; }\n"));
        assert!(out.contains("    public string? DisplayName { get; set; }\n"));
        assert!(out.contains("    public Guid AccountId { get; set; }\n"));
    }

    #[test]
    fn test_json_property_name_uses_column_name() {
        let out = generate(json!({"jsonPropertyName": true, "camelCaseProperties": true}));
        assert!(out.starts_with("using System.Text.Json.Serialization;\n\npublic class Accounts\n{\n"));
        assert!(out.contains("    [JsonPropertyName(\"account_id\")]\n    public Guid accountId;\n"));
    }
}
