//! MyBatis XML mapper emitter.

use typegen_codegen::builder::CodeBuilder;
use typegen_codegen::{EmitContext, Emitter, Result, Style, drain};
use typegen_core::{ColumnResult, Ordered};

use super::{ColumnSets, Statement, entity_name};
use crate::MyBatisOptions;

/// Emits a `<mapper>` document with the requested CRUD statements.
#[derive(Debug, Clone, Copy, Default)]
pub struct MyBatisXmlEmitter;

fn open_tag(statement: Statement, type_name: &str) -> String {
    let (attribute, class) = match statement {
        Statement::Select => ("resultType", format!("{}Response", type_name)),
        _ => ("parameterType", format!("{}Dto", type_name)),
    };
    format!(
        "<{} id=\"{}\" {}=\"{}\">",
        statement.verb(),
        statement.id(type_name),
        attribute,
        class
    )
}

impl Emitter for MyBatisXmlEmitter {
    type Options = MyBatisOptions;

    fn style(&self) -> Style {
        Style::MyBatisXml
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
            .push_line(&format!("<mapper namespace=\"{}Repository\">", name))
            .push_indent();

        for (i, statement) in Statement::selected(options).into_iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            builder.push_line(&open_tag(statement, name)).push_indent();
            for line in statement.sql(&ctx.table, &sets) {
                builder.push_line(&line);
            }
            builder
                .push_dedent()
                .push_line(&format!("</{}>", statement.verb()));
        }

        builder.push_dedent().push_line("</mapper>");
        Ok(builder.build())
    }
}
