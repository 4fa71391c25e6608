//! Shared code generation utilities for the typegen source generator.
//!
//! This crate provides the language-agnostic pieces used by every
//! language-specific emitter crate (e.g. `typegen-codegen-java`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`emit`] - The [`Emitter`] contract and per-unit [`EmitContext`]
//! - [`language`] - Target languages and output styles
//! - [`options`] - Decoding of per-style option payloads
//! - [`testing`] - Column fixtures (feature-gated)

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod builder;
pub mod emit;
pub mod language;
pub mod options;

mod error;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use emit::{EmitContext, Emitter, drain};
pub use error::{Error, Result};
pub use language::{Language, Style};
pub use options::decode_options;
