//! C# declaration builders with Allman braces.

mod attributes;
mod type_decl;

pub use attributes::{Attribute, JSON_SERIALIZATION};
pub use type_decl::{Member, Parameter, PositionalRecord, TypeDecl};
