//! Core utilities and types for the schemagen code generator.
//!
//! This crate provides the file writing and string casing primitives
//! shared by the schema, codegen and CLI crates.

mod file;
mod utils;

// File operations
pub use file::{File, output_file_name, output_stem};
// String utilities
pub use utils::{snake_to_camel, to_upper_camel_case};
