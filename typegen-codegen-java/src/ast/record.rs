//! Java record builder.

use typegen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::{Annotation, Field};

/// Builder for positional `public record` declarations.
///
/// Components are comma separated with no separator after the last one.
#[derive(Debug, Clone)]
pub struct Record {
    name: String,
    annotations: Vec<Annotation>,
    components: Vec<Field>,
    spaced: bool,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotations: Vec::new(),
            components: Vec::new(),
            spaced: false,
        }
    }

    pub fn annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn component(mut self, component: Field) -> Self {
        self.components.push(component);
        self
    }

    /// Separate components with a blank line.
    pub fn spaced(mut self) -> Self {
        self.spaced = true;
        self
    }

    fn components_to_fragments(&self) -> Vec<CodeFragment> {
        let last = self.components.len().saturating_sub(1);
        let mut body = Vec::new();
        for (i, component) in self.components.iter().enumerate() {
            if self.spaced && i > 0 {
                body.push(CodeFragment::Blank);
            }
            let separator = if i < last { "," } else { "" };
            body.extend(component.fragments_with(format!(
                "{} {}{}",
                component.ty, component.name, separator
            )));
        }
        body
    }

    /// Build the record as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::java();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Record {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<CodeFragment> = self
            .annotations
            .iter()
            .map(|a| CodeFragment::Line(a.to_string()))
            .collect();

        if self.components.is_empty() {
            fragments.push(CodeFragment::Line(format!(
                "public record {}() {{}}",
                self.name
            )));
        } else {
            fragments.push(CodeFragment::Block {
                header: format!("public record {}(", self.name),
                body: self.components_to_fragments(),
                close: Some(") {}".to_string()),
            });
        }
        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record() {
        assert_eq!(Record::new("Empty").build(), "public record Empty() {}\n");
    }

    #[test]
    fn test_no_trailing_separator() {
        let r = Record::new("Users")
            .annotation(Annotation::Builder)
            .component(Field::new("id", "Integer"))
            .component(Field::new("name", "String"))
            .build();
        assert_eq!(
            r,
            "@Builder\npublic record Users(\n    Integer id,\n    String name\n) {}\n"
        );
    }

    #[test]
    fn test_spaced_components_with_annotations() {
        let r = Record::new("Users")
            .spaced()
            .component(Field::new("id", "Integer").annotation(Annotation::schema("user id")))
            .component(Field::new("name", "String"))
            .build();
        assert_eq!(
            r,
            "public record Users(\n    @Schema(description = \"user id\")\n    Integer id,\n\n    String name\n) {}\n"
        );
    }
}
