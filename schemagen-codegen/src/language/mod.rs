//! Language-specific abstractions.
//!
//! This module provides traits and types for language-specific code generation:
//! - [`LanguageCodegen`] - Main trait for language code generators
//! - [`TypeMapper`] - Trait for mapping model types to language types
//! - [`GeneratedSource`] - Result of emitting one schema

mod traits;

pub use traits::{GeneratedSource, LanguageCodegen, TypeMapper};
