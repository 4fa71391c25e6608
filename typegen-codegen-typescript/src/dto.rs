//! `interface`, `class` and object `type` emitter.

use typegen_codegen::builder::CodeBuilder;
use typegen_codegen::{EmitContext, Emitter, Result, Style};
use typegen_core::{ColumnDescriptor, ColumnResult, Ordered, TypeMapper};

use crate::TypeScriptOptions;
use crate::ast::{DeclKind, ObjectDecl, Property};
use crate::naming::{comment_text, property_name};
use crate::type_mapper::TypeScriptTypeMapper;

/// Emits one TypeScript object declaration per table.
#[derive(Debug, Clone, Copy)]
pub struct TypeScriptEmitter {
    kind: DeclKind,
}

impl TypeScriptEmitter {
    pub fn new(kind: DeclKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> DeclKind {
        self.kind
    }

    fn property(
        &self,
        column: &ColumnDescriptor,
        ctx: &EmitContext,
        options: &TypeScriptOptions,
    ) -> Property {
        let mut ty = TypeScriptTypeMapper.map_type(ctx.engine, &column.raw_type);
        let nullable = column.is_nullable();

        if nullable && options.strict_null_checks {
            ty.push_str(" | null");
        }

        let mut property = Property::new(property_name(&column.name), ty.as_str());

        if options.optional_properties || (nullable && !options.strict_null_checks) {
            property = property.optional();
        }
        if options.readonly_properties {
            property = property.readonly();
        }
        if options.js_doc_comments {
            property = property.doc(format!("@type {{{}}}", ty));
        }
        if options.comments
            && let Some(doc) = column.doc()
        {
            property = property.doc(comment_text(doc));
        }

        property
    }
}

impl Emitter for TypeScriptEmitter {
    type Options = TypeScriptOptions;

    fn style(&self) -> Style {
        match self.kind {
            DeclKind::Interface => Style::Interface,
            DeclKind::Class => Style::Class,
            DeclKind::Type => Style::Type,
        }
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
        let mut decl = ObjectDecl::new(self.kind, &ctx.type_name);
        if options.export_all_types {
            decl = decl.exported();
        }
        if options.extra_spacing {
            decl = decl.spaced();
        }

        while let Some(column) = ctx.next_column(&mut columns)? {
            decl = decl.property(self.property(&column, ctx, options));
        }

        let export = if options.export_all_types {
            "export "
        } else {
            ""
        };
        let name = decl.name();

        let mut builder = CodeBuilder::typescript();
        builder.emit(&decl);
        let builder = builder
            .when(options.partial_type || options.readonly_type, |b| b.blank())
            .when(options.partial_type, |b| {
                b.line(&format!(
                    "{}type Partial{} = Partial<{}>;",
                    export, name, name
                ))
            })
            .when(options.readonly_type, |b| {
                b.line(&format!(
                    "{}type Readonly{} = Readonly<{}>;",
                    export, name, name
                ))
            });

        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use typegen_codegen::Error;
    use typegen_codegen::testing::{failing_stream, mysql_users, stream};
    use typegen_core::{ColumnDescriptor, Engine};

    use super::*;

    fn generate(kind: DeclKind, options: Value) -> String {
        let ctx = EmitContext::new("users", Engine::MySql);
        TypeScriptEmitter::new(kind)
            .generate(stream(mysql_users()), &ctx, &options)
            .unwrap()
    }

    #[test]
    fn test_interface_default_markers() {
        let out = generate(DeclKind::Interface, json!({"optionalProperties": false}));
        assert!(out.contains("id: number"));
        assert!(out.contains("createdAt?: string | Date"));
        assert!(out.contains("name: string"));
        assert!(!out.contains("name?"));
    }

    #[test]
    fn test_strict_null_checks_replaces_marker() {
        let out = generate(DeclKind::Interface, json!({"strictNullChecks": true}));
        assert!(out.contains("  createdAt: string | Date | null;\n"));
        assert!(!out.contains('?'));
    }

    #[test]
    fn test_optional_properties_marks_every_field() {
        let out = generate(DeclKind::Type, json!({"optionalProperties": true}));
        assert!(out.contains("  id?: number;\n"));
        assert!(out.contains("  name?: string;\n"));
    }

    #[test]
    fn test_docs_order() {
        let out = generate(
            DeclKind::Interface,
            json!({"jsDocComments": true, "comments": true}),
        );
        assert!(out.contains("  /** @type {number} */\n  /** user id */\n  id: number;\n"));
        // columns without a comment only get the type doc
        assert!(out.contains("  /** @type {string} */\n  name: string;\n"));
    }

    #[test]
    fn test_comment_cannot_close_the_doc_block() {
        let ctx = EmitContext::new("notes", Engine::Postgres);
        let columns =
            vec![ColumnDescriptor::new(1, "body", "text").comment("first */ line\r\nsecond")];
        let out = TypeScriptEmitter::new(DeclKind::Interface)
            .generate(stream(columns), &ctx, &json!({"comments": true}))
            .unwrap();
        assert_eq!(
            out,
            "interface Notes {\n  /** first *\\/ line second */\n  body: string;\n}\n"
        );
    }

    #[test]
    fn test_class_default_export_and_aliases() {
        let out = generate(
            DeclKind::Class,
            json!({"exportAllTypes": true, "partialType": true, "readonlyType": true}),
        );
        assert!(out.starts_with("export default class Users {\n"));
        assert!(out.ends_with(
            "}\n\nexport type PartialUsers = Partial<Users>;\nexport type ReadonlyUsers = Readonly<Users>;\n"
        ));
    }

    #[test]
    fn test_readonly_properties() {
        let out = generate(DeclKind::Interface, json!({"readonlyProperties": true}));
        assert!(out.contains("  readonly id: number;\n"));
    }

    #[test]
    fn test_field_order_follows_ordinals() {
        let out = generate(DeclKind::Interface, Value::Null);
        let id = out.find("id:").unwrap();
        let created = out.find("createdAt").unwrap();
        let name = out.find("name:").unwrap();
        assert!(id < created && created < name);
    }

    #[test]
    fn test_invalid_options_fail_before_reading() {
        let ctx = EmitContext::new("users", Engine::MySql);
        let err = TypeScriptEmitter::new(DeclKind::Interface)
            .generate(failing_stream(vec![], "unreachable"), &ctx, &json!("yes"))
            .unwrap_err();
        match err {
            Error::InvalidOptions { style, .. } => assert_eq!(style, "interface"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_stream_error_discards_output() {
        let ctx = EmitContext::new("users", Engine::MySql);
        let err = TypeScriptEmitter::new(DeclKind::Interface)
            .generate(
                failing_stream(vec![ColumnDescriptor::new(1, "id", "int")], "lost connection"),
                &ctx,
                &Value::Null,
            )
            .unwrap_err();
        assert!(matches!(err, Error::Stream { .. }));
    }
}
