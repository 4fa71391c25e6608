//! TypeScript object declaration builder (`interface`, `class`, `type`).

use typegen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// Shape of an object declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Interface,
    Class,
    /// `type Name = { ... };`
    Type,
}

impl DeclKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Interface => "interface",
            Self::Class => "class",
            Self::Type => "type",
        }
    }

    /// Classes are exported as the module default.
    fn export_modifier(&self) -> &'static str {
        match self {
            Self::Class => "export default ",
            Self::Interface | Self::Type => "export ",
        }
    }
}

/// A property in an object declaration.
#[derive(Debug, Clone)]
pub struct Property {
    pub name: String,
    pub ty: String,
    pub optional: bool,
    pub readonly: bool,
    pub docs: Vec<String>,
}

impl Property {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
            readonly: false,
            docs: Vec::new(),
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    /// Add a `/** text */` line above the property.
    pub fn doc(mut self, text: impl Into<String>) -> Self {
        self.docs.push(text.into());
        self
    }

    fn to_fragments(&self) -> Vec<CodeFragment> {
        let readonly = if self.readonly { "readonly " } else { "" };
        let optional = if self.optional { "?" } else { "" };

        let mut fragments: Vec<CodeFragment> =
            self.docs.iter().map(CodeFragment::doc).collect();
        fragments.push(CodeFragment::Line(format!(
            "{}{}{}: {};",
            readonly, self.name, optional, self.ty
        )));
        fragments
    }
}

/// Builder for TypeScript object declarations.
#[derive(Debug, Clone)]
pub struct ObjectDecl {
    kind: DeclKind,
    name: String,
    properties: Vec<Property>,
    exported: bool,
    spaced: bool,
}

impl ObjectDecl {
    pub fn new(kind: DeclKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            properties: Vec::new(),
            exported: false,
            spaced: false,
        }
    }

    /// Add a property.
    pub fn property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// Export this declaration.
    pub fn exported(mut self) -> Self {
        self.exported = true;
        self
    }

    /// Separate properties with a blank line.
    pub fn spaced(mut self) -> Self {
        self.spaced = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn header(&self) -> String {
        let export = if self.exported {
            self.kind.export_modifier()
        } else {
            ""
        };
        match self.kind {
            DeclKind::Type => format!("{}type {} = {{", export, self.name),
            kind => format!("{}{} {} {{", export, kind.keyword(), self.name),
        }
    }

    fn close(&self) -> &'static str {
        match self.kind {
            DeclKind::Type => "};",
            DeclKind::Interface | DeclKind::Class => "}",
        }
    }

    fn properties_to_fragments(&self) -> Vec<CodeFragment> {
        let mut body = Vec::new();
        for (i, property) in self.properties.iter().enumerate() {
            if self.spaced && i > 0 {
                body.push(CodeFragment::Blank);
            }
            body.extend(property.to_fragments());
        }
        body
    }

    /// Build the declaration as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for ObjectDecl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.properties.is_empty() {
            vec![CodeFragment::Line(format!(
                "{}{}",
                self.header(),
                self.close()
            ))]
        } else {
            vec![CodeFragment::Block {
                header: self.header(),
                body: self.properties_to_fragments(),
                close: Some(self.close().to_string()),
            }]
        }
    }
}
