//! Text generation primitives.
//!
//! - [`CodeBuilder`] - indented line accumulation
//! - [`CodeFragment`] / [`Renderable`] - declarative output of AST nodes
//! - [`Indent`] - per-language indentation unit

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
