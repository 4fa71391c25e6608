//! Schema-driven source generation.
//!
//! Resolves a [`GenerationRequest`](typegen_request::GenerationRequest) to a
//! [`Target`] and runs its emitter over each requested table's column
//! stream.
//!
//! ```ignore
//! use typegen::generate;
//! use typegen_request::{GenerationRequest, SchemaFile};
//!
//! let request = GenerationRequest::from_file("request.json")?;
//! let schema = SchemaFile::open("schema.toml")?;
//! print!("{}", generate(&request, &schema)?.text());
//! ```

mod generate;
mod registry;

pub use generate::{Generated, GeneratedUnit, generate};
pub use registry::{Configured, Target};
