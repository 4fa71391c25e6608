//! Lombok DTO class emitter.

use typegen_codegen::{EmitContext, Emitter, Result, Style};
use typegen_core::{ColumnDescriptor, ColumnResult, Engine, Ordered, TypeMapper, to_camel_case};

use crate::JavaDtoOptions;
use crate::ast::{Annotation, Class, Field};
use crate::naming::field_name;
use crate::type_mapper::JavaTypeMapper;

/// Build the field for a column, shared by classes and records.
pub(crate) fn column_field(
    column: &ColumnDescriptor,
    engine: Engine,
    swagger: bool,
    jackson: bool,
) -> Field {
    let mut field = Field::new(
        field_name(&column.name),
        JavaTypeMapper.map_type(engine, &column.raw_type),
    );
    if swagger && let Some(doc) = column.doc() {
        field = field.annotation(Annotation::schema(doc));
    }
    if jackson {
        field = field.annotation(Annotation::json_property(to_camel_case(&column.name)));
    }
    field
}

/// Emits one Lombok-annotated class per table.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaDtoEmitter;

impl JavaDtoEmitter {
    fn class(name: &str, options: &JavaDtoOptions) -> Class {
        let mut class = Class::new(name);

        if options.data {
            class = class.annotation(Annotation::Data);
        } else {
            if options.getter {
                class = class.annotation(Annotation::Getter);
            }
            if options.setter {
                class = class.annotation(Annotation::Setter);
            }
        }
        if options.no_args_constructor {
            class = class.annotation(Annotation::NoArgsConstructor);
        }
        if options.all_args_constructor {
            class = class.annotation(Annotation::AllArgsConstructor);
        }
        if options.builder {
            class = class.annotation(Annotation::Builder);
        }
        if options.serializable {
            class = class.implements("Serializable");
        }
        if options.extra_spacing {
            class = class.spaced();
        }
        class
    }
}

impl Emitter for JavaDtoEmitter {
    type Options = JavaDtoOptions;

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
        let mut class = Self::class(&ctx.type_name, options);

        while let Some(column) = ctx.next_column(&mut columns)? {
            class = class.field(column_field(
                &column,
                ctx.engine,
                options.swagger_annotations,
                options.jackson_annotations,
            ));
        }

        Ok(class.build())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use typegen_codegen::Error;
    use typegen_codegen::testing::{failing_stream, mysql_users, stream};

    use super::*;

    fn generate(options: Value) -> String {
        let ctx = EmitContext::new("users", Engine::MySql);
        JavaDtoEmitter
            .generate(stream(mysql_users()), &ctx, &options)
            .unwrap()
    }

    #[test]
    fn test_plain_class() {
        let out = generate(Value::Null);
        assert_eq!(
            out,
            "public class Users {\n    private Integer id;\n    private LocalDateTime createdAt;\n    private String name;\n}\n"
        );
    }

    #[test]
    fn test_data_supersedes_accessors() {
        let out = generate(json!({"data": true, "getter": true, "setter": true}));
        assert!(out.starts_with("@Data\npublic class Users {"));
        assert!(!out.contains("@Getter"));
        assert!(!out.contains("@Setter"));
    }

    #[test]
    fn test_annotation_order() {
        let out = generate(json!({
            "getter": true,
            "setter": true,
            "noArgsConstructor": true,
            "allArgsConstructor": true,
            "builder": true,
            "serializable": true
        }));
        assert!(out.starts_with(
            "@Getter\n@Setter\n@NoArgsConstructor\n@AllArgsConstructor\n@Builder\npublic class Users implements Serializable {\n"
        ));
    }

    #[test]
    fn test_member_annotations() {
        let out = generate(json!({"swaggerAnnotations": true, "jacksonAnnotations": true}));
        assert!(out.contains(
            "    @Schema(description = \"user id\")\n    @JsonProperty(\"id\")\n    private Integer id;\n"
        ));
        // no comment, no @Schema
        assert!(out.contains("    @JsonProperty(\"createdAt\")\n    private LocalDateTime createdAt;\n"));
    }

    #[test]
    fn test_reserved_field_keeps_json_name() {
        let ctx = EmitContext::new("items", Engine::Postgres);
        let columns = vec![ColumnDescriptor::new(1, "class", "text")];
        let out = JavaDtoEmitter
            .generate(stream(columns), &ctx, &json!({"jacksonAnnotations": true}))
            .unwrap();
        assert!(out.contains("    @JsonProperty(\"class\")\n    private String class_;\n"));
    }

    #[test]
    fn test_stream_error_discards_output() {
        let ctx = EmitContext::new("users", Engine::MySql);
        let err = JavaDtoEmitter
            .generate(failing_stream(mysql_users(), "scan failed"), &ctx, &Value::Null)
            .unwrap_err();
        assert!(matches!(err, Error::Stream { .. }));
    }
}
