//! Declarative fragments for AST nodes.
//!
//! Declaration builders (classes, records, interfaces) describe their
//! output as [`CodeFragment`]s; [`CodeBuilder`](super::CodeBuilder) turns
//! them into indented text.

/// A piece of generated source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeFragment {
    /// One line at the current depth.
    Line(String),
    /// An empty line, never indented.
    Blank,
    /// `header`, then `body` one level deeper, then `close` at the header's depth.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// A single-line block comment, `/** text */`.
    Doc(String),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn doc(s: impl Into<String>) -> Self {
        Self::Doc(s.into())
    }

    /// Block closed by `close`.
    pub fn block(header: impl Into<String>, body: Vec<CodeFragment>, close: &str) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close: Some(close.to_string()),
        }
    }
}

/// A node that can describe itself as fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_constructor() {
        let block = CodeFragment::block(
            "public class Users {",
            vec![CodeFragment::line("private Integer id;")],
            "}",
        );
        assert_eq!(
            block,
            CodeFragment::Block {
                header: "public class Users {".into(),
                body: vec![CodeFragment::Line("private Integer id;".into())],
                close: Some("}".into()),
            }
        );
    }
}
