//! TypeScript emitters for the typegen source generator.
//!
//! Two families of output are produced from table column metadata:
//!
//! - [`TypeScriptEmitter`] - `interface`, `class` or object `type` declarations
//! - [`ZodEmitter`] - [Zod](https://zod.dev) runtime validation schemas
//!
//! # Usage
//!
//! ```ignore
//! use typegen_codegen::{EmitContext, Emitter};
//! use typegen_codegen_typescript::{DeclKind, TypeScriptEmitter};
//!
//! let ctx = EmitContext::new("users", Engine::MySql);
//! let source = TypeScriptEmitter::new(DeclKind::Interface)
//!     .generate(columns, &ctx, &options)?;
//! ```

mod dto;
mod naming;
mod options;
mod type_mapper;
mod zod;

pub mod ast;

pub use dto::TypeScriptEmitter;
pub use naming::{comment_text, property_name};
pub use options::{TypeScriptOptions, ZodOptions};
pub use type_mapper::{TypeScriptTypeMapper, ZodTypeMapper};
pub use zod::ZodEmitter;

pub use ast::DeclKind;
