//! C# class and record builders (Allman braces).

use typegen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::Attribute;

/// A member line preceded by its attributes.
#[derive(Debug, Clone)]
pub struct Member {
    pub attributes: Vec<Attribute>,
    pub declaration: String,
}

impl Member {
    pub fn new(declaration: impl Into<String>) -> Self {
        Self {
            attributes: Vec::new(),
            declaration: declaration.into(),
        }
    }

    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }
}

/// `using` directives required by `attributes`, deduplicated, in first-use order.
fn usings<'a>(attributes: impl Iterator<Item = &'a Attribute>) -> Vec<&'static str> {
    let mut namespaces = Vec::new();
    for attribute in attributes {
        let namespace = attribute.namespace();
        if !namespaces.contains(&namespace) {
            namespaces.push(namespace);
        }
    }
    namespaces
}

fn using_fragments(namespaces: &[&str]) -> Vec<CodeFragment> {
    let mut fragments: Vec<CodeFragment> = namespaces
        .iter()
        .map(|ns| CodeFragment::Line(format!("using {};", ns)))
        .collect();
    if !fragments.is_empty() {
        fragments.push(CodeFragment::Blank);
    }
    fragments
}

/// Builder for `public class` and `public record` declarations with a body.
#[derive(Debug, Clone)]
pub struct TypeDecl {
    keyword: &'static str,
    name: String,
    members: Vec<Member>,
    spaced: bool,
}

impl TypeDecl {
    pub fn class(name: impl Into<String>) -> Self {
        Self::new("class", name)
    }

    pub fn record(name: impl Into<String>) -> Self {
        Self::new("record", name)
    }

    fn new(keyword: &'static str, name: impl Into<String>) -> Self {
        Self {
            keyword,
            name: name.into(),
            members: Vec::new(),
            spaced: false,
        }
    }

    pub fn member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    /// Separate members with a blank line.
    pub fn spaced(mut self) -> Self {
        self.spaced = true;
        self
    }

    fn members_to_fragments(&self) -> Vec<CodeFragment> {
        let mut body = Vec::new();
        for (i, member) in self.members.iter().enumerate() {
            if self.spaced && i > 0 {
                body.push(CodeFragment::Blank);
            }
            body.extend(
                member
                    .attributes
                    .iter()
                    .map(|a| CodeFragment::Line(a.to_string())),
            );
            body.push(CodeFragment::Line(member.declaration.clone()));
        }
        body
    }

    /// Build the declaration as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::csharp();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for TypeDecl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let namespaces = usings(self.members.iter().flat_map(|m| m.attributes.iter()));
        let mut fragments = using_fragments(&namespaces);

        fragments.push(CodeFragment::Line(format!(
            "public {} {}",
            self.keyword, self.name
        )));
        fragments.push(CodeFragment::Block {
            header: "{".to_string(),
            body: self.members_to_fragments(),
            close: Some("}".to_string()),
        });
        fragments
    }
}

/// A primary-constructor parameter of a positional record.
#[derive(Debug, Clone)]
pub struct Parameter {
    pub ty: String,
    pub name: String,
    pub attributes: Vec<Attribute>,
}

impl Parameter {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }
}

/// Builder for `public record Name(...);`.
#[derive(Debug, Clone)]
pub struct PositionalRecord {
    name: String,
    parameters: Vec<Parameter>,
    spaced: bool,
}

impl PositionalRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            spaced: false,
        }
    }

    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Separate parameters with a blank line.
    pub fn spaced(mut self) -> Self {
        self.spaced = true;
        self
    }

    fn parameters_to_fragments(&self) -> Vec<CodeFragment> {
        let last = self.parameters.len().saturating_sub(1);
        let mut body = Vec::new();
        for (i, parameter) in self.parameters.iter().enumerate() {
            if self.spaced && i > 0 {
                body.push(CodeFragment::Blank);
            }
            // `property:` places the attribute on the generated property
            let mut line: String = parameter
                .attributes
                .iter()
                .map(|a| format!("{} ", a.targeted("property")))
                .collect();
            line.push_str(&format!("{} {}", parameter.ty, parameter.name));
            if i < last {
                line.push(',');
            }
            body.push(CodeFragment::Line(line));
        }
        body
    }

    /// Build the record as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::csharp();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for PositionalRecord {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let namespaces = usings(self.parameters.iter().flat_map(|p| p.attributes.iter()));
        let mut fragments = using_fragments(&namespaces);

        if self.parameters.is_empty() {
            fragments.push(CodeFragment::Line(format!("public record {}();", self.name)));
        } else {
            fragments.push(CodeFragment::Block {
                header: format!("public record {}(", self.name),
                body: self.parameters_to_fragments(),
                close: Some(");".to_string()),
            });
        }
        fragments
    }
}
