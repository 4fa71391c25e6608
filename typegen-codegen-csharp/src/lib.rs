//! C# emitters for the typegen source generator.
//!
//! - [`CSharpDtoEmitter`] - classes with auto-properties or public fields
//! - [`CSharpRecordEmitter`] - positional or property-bodied records

mod dto;
mod naming;
mod nullability;
mod options;
mod record;
mod type_mapper;

pub mod ast;

pub use dto::CSharpDtoEmitter;
pub use naming::property_name;
pub use nullability::{is_value_type, make_nullable};
pub use options::{CSharpDtoOptions, CSharpRecordOptions};
pub use record::CSharpRecordEmitter;
pub use type_mapper::CSharpTypeMapper;
