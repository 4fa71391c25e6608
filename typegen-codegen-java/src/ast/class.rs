//! Java class builder.

use typegen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::Annotation;

/// A field of a class or a component of a record.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub ty: String,
    pub annotations: Vec<Annotation>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            annotations: Vec::new(),
        }
    }

    pub fn annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Annotation lines followed by `declaration`.
    pub(crate) fn fragments_with(&self, declaration: String) -> Vec<CodeFragment> {
        let mut fragments: Vec<CodeFragment> = self
            .annotations
            .iter()
            .map(|a| CodeFragment::Line(a.to_string()))
            .collect();
        fragments.push(CodeFragment::Line(declaration));
        fragments
    }
}

/// Builder for `public class` declarations with private fields.
#[derive(Debug, Clone)]
pub struct Class {
    name: String,
    annotations: Vec<Annotation>,
    implements: Vec<String>,
    fields: Vec<Field>,
    spaced: bool,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotations: Vec::new(),
            implements: Vec::new(),
            fields: Vec::new(),
            spaced: false,
        }
    }

    pub fn annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.implements.push(interface.into());
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Separate fields with a blank line.
    pub fn spaced(mut self) -> Self {
        self.spaced = true;
        self
    }

    fn header(&self) -> String {
        if self.implements.is_empty() {
            format!("public class {} {{", self.name)
        } else {
            format!(
                "public class {} implements {} {{",
                self.name,
                self.implements.join(", ")
            )
        }
    }

    fn fields_to_fragments(&self) -> Vec<CodeFragment> {
        let mut body = Vec::new();
        for (i, field) in self.fields.iter().enumerate() {
            if self.spaced && i > 0 {
                body.push(CodeFragment::Blank);
            }
            body.extend(field.fragments_with(format!("private {} {};", field.ty, field.name)));
        }
        body
    }

    /// Build the class as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::java();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Class {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<CodeFragment> = self
            .annotations
            .iter()
            .map(|a| CodeFragment::Line(a.to_string()))
            .collect();

        if self.fields.is_empty() {
            fragments.push(CodeFragment::Line(format!("{}}}", self.header())));
        } else {
            fragments.push(CodeFragment::Block {
                header: self.header(),
                body: self.fields_to_fragments(),
                close: Some("}".to_string()),
            });
        }
        fragments
    }
}
