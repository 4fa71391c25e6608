//! Java declaration builders.
//!
//! [`Class`] and [`Record`] describe themselves as code fragments; members
//! carry their [`Annotation`]s.

mod annotations;
mod class;
mod record;

pub use annotations::{Annotation, string_literal};
pub use class::{Class, Field};
pub use record::Record;
