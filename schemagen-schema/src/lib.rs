//! JSON Schema parsing for the schemagen code generator.
//!
//! Parses schema documents with [`serde_json`] into a [`JsonSchema`] tree
//! and reports malformed documents and dangling `$ref`s as [`miette`]
//! diagnostics pointing into the source.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod parse;
mod reference;
mod schema;

pub use error::{Error, Result, SourceContext};
pub use parse::parse_schema;
pub use reference::Reference;
pub use schema::{AdditionalProperties, JsonSchema, SchemaType, TypeSet};
