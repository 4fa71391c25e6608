//! List command report data structures.

use std::path::PathBuf;

use typegen::Target;
use typegen_codegen::Language;
use typegen_core::Engine;

use super::output::{Output, Report};

/// Tables described by a column metadata file.
#[derive(Debug)]
pub struct SchemaSummary {
    pub path: PathBuf,
    pub engine: Engine,
    /// Table names in file order.
    pub tables: Vec<String>,
}

/// Supported targets, and optionally the tables available to generate.
#[derive(Debug)]
pub struct ListReport {
    pub targets: Vec<Target>,
    pub schema: Option<SchemaSummary>,
}

impl ListReport {
    /// Styles registered for `language`, in registry order.
    fn styles_of(&self, language: Language) -> Vec<&'static str> {
        self.targets
            .iter()
            .filter(|t| t.language() == language)
            .map(|t| t.style().as_str())
            .collect()
    }
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        out.section("Targets");
        for language in [Language::Java, Language::CSharp, Language::TypeScript] {
            let styles = self.styles_of(language);
            if !styles.is_empty() {
                out.list_item(&format!("{}: {}", language, styles.join(", ")));
            }
        }

        if let Some(schema) = &self.schema {
            out.newline();
            out.key_value("Schema", &schema.path.display().to_string());
            out.key_value("Engine", schema.engine.as_str());
            if schema.tables.is_empty() {
                out.section("No tables defined");
            } else {
                out.section(&format!("Tables ({})", schema.tables.len()));
                for table in &schema.tables {
                    out.list_item(table);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_targets_grouped_by_language() {
        let report = ListReport {
            targets: Target::all().to_vec(),
            schema: None,
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "Targets:",
                "  - java: dto, record, mybatis-xml, mybatis-annotation",
                "  - csharp: dto, record",
                "  - typescript: interface, class, type, zod",
            ]
        );
    }

    #[test]
    fn test_schema_tables() {
        let report = ListReport {
            targets: vec![Target::CSharpRecord],
            schema: Some(SchemaSummary {
                path: PathBuf::from("schema.toml"),
                engine: Engine::Postgres,
                tables: vec!["orders".into(), "users".into()],
            }),
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "Targets:",
                "  - csharp: record",
                "",
                "Schema: schema.toml",
                "Engine: postgres",
                "Tables (2):",
                "  - orders",
                "  - users",
            ]
        );
    }
}
