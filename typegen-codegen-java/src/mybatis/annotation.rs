//! Annotated `@Mapper` interface emitter.

use typegen_codegen::builder::CodeBuilder;
use typegen_codegen::{EmitContext, Emitter, Result, Style, drain};
use typegen_core::{ColumnResult, Ordered};

use super::{ColumnSets, Statement, entity_name};
use crate::MyBatisOptions;
use crate::ast::Annotation;

/// Emits a MyBatis mapper interface with SQL in text-block annotations.
#[derive(Debug, Clone, Copy, Default)]
pub struct MyBatisAnnotationEmitter;

fn annotation_name(statement: Statement) -> &'static str {
    match statement {
        Statement::Select => "Select",
        Statement::Insert => "Insert",
        Statement::Update => "Update",
        Statement::Delete => "Delete",
    }
}

fn signature(statement: Statement, type_name: &str) -> String {
    let id = statement.id(type_name);
    match statement {
        Statement::Select => format!(
            "{}Response {}({}Response param);",
            type_name, id, type_name
        ),
        _ => format!("int {}({}Dto dto);", id, type_name),
    }
}

impl Emitter for MyBatisAnnotationEmitter {
    type Options = MyBatisOptions;

    fn style(&self) -> Style {
        Style::MyBatisAnnotation
    }

    fn emit<I>(
        &self,
        columns: Ordered<I>,
        ctx: &EmitContext,
        options: &Self::Options,
    ) -> Result<String>
    where
        I: Iterator<Item = ColumnResult>,
    {
        let sets = ColumnSets::classify(drain(columns, ctx)?);
        let name = &entity_name(&ctx.table);

        let mut builder = CodeBuilder::java();
        builder
            .push_line("import org.apache.ibatis.annotations.*;")
            .push_blank()
            .push_line(&Annotation::Mapper.to_string())
            .push_line(&format!("public interface {}Repository {{", name))
            .push_indent();

        for (i, statement) in Statement::selected(options).into_iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            builder
                .push_line(&format!("@{}(\"\"\"", annotation_name(statement)))
                .push_indent();
            for line in statement.sql(&ctx.table, &sets) {
                builder.push_line(&line);
            }
            builder
                .push_line("\"\"\")")
                .push_dedent()
                .push_line(&signature(statement, name));
        }

        builder.push_dedent().push_line("}");
        Ok(builder.build())
    }
}
