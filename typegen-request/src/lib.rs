//! Request and column-metadata decoding for typegen.
//!
//! - [`GenerationRequest`] - what to generate, from JSON or TOML
//! - [`SchemaFile`] - a [`ColumnProvider`] backed by a TOML dump of
//!   `information_schema.columns`
//!
//! Decoding failures are [`miette`] diagnostics pointing into the source file.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod provider;
mod request;
mod schema_file;

pub use error::{Error, Result, SourceContext};
pub use provider::ColumnProvider;
pub use request::{GenerationRequest, RequestFormat};
pub use schema_file::{SchemaColumns, SchemaFile};
