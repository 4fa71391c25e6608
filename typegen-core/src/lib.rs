//! Core types for the typegen source generator.
//!
//! This crate provides the column metadata model shared by every emitter,
//! the supported database engines, case conversion helpers and the
//! [`TypeMapper`] contract implemented by each target language.

mod column;
mod engine;
mod type_mapper;
mod utils;

// Column metadata
pub use column::{ColumnDescriptor, ColumnResult, Nullability, Ordered, StreamError, ordered};
// Database engines
pub use engine::Engine;
// Type mapping
pub use type_mapper::{TypeMapper, normalize_type_name};
// String utilities
pub use utils::{to_camel_case, to_pascal_case, type_name};
