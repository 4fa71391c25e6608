//! TypeScript AST builders for object declarations and call chains.
//!
//! Declarations render through [`CodeBuilder`](typegen_codegen::builder::CodeBuilder);
//! chains render inline via `Display`.

mod chain;
mod interface;

pub use chain::MethodChain;
pub use interface::{DeclKind, ObjectDecl, Property};
