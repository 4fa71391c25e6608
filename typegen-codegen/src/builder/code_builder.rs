//! Indentation-aware text accumulation.

use super::{CodeFragment, Indent, Renderable};

/// Accumulates lines of source at a tracked indentation depth.
///
/// `push_*` methods borrow and chain; [`line`](Self::line),
/// [`blank`](Self::blank), [`dedent`](Self::dedent) and
/// [`when`](Self::when) take the builder by value for use in expressions.
///
/// ```
/// use typegen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::typescript();
/// builder
///     .push_line("export interface Users {")
///     .push_indent()
///     .push_line("id: number;")
///     .push_dedent()
///     .push_line("}");
/// assert_eq!(builder.build(), "export interface Users {\n  id: number;\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent: Indent,
    depth: usize,
    out: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent,
            depth: 0,
            out: String::new(),
        }
    }

    pub fn java() -> Self {
        Self::new(Indent::FOUR)
    }

    pub fn csharp() -> Self {
        Self::new(Indent::FOUR)
    }

    pub fn typescript() -> Self {
        Self::new(Indent::TWO)
    }

    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.out.push_str(&self.indent.repeat(self.depth));
        self.out.push_str(s);
        self.out.push('\n');
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.out.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    /// Go one level shallower; a no-op at depth zero.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    /// Append the fragments of `node` at the current depth.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.render(fragment);
        }
        self
    }

    fn render(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Doc(text) => {
                self.push_line(&format!("/** {} */", text));
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header).push_indent();
                for inner in body {
                    self.render(inner);
                }
                self.push_dedent();
                if let Some(close) = close {
                    self.push_line(&close);
                }
            }
        }
    }

    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    /// Apply `f` only if `condition` holds.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    pub fn build(self) -> String {
        self.out
    }
}
