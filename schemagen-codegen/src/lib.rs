//! Shared code generation utilities for the schemagen code generator.
//!
//! This crate provides language-agnostic abstractions and utilities
//! used by the language-specific emitters (e.g., `schemagen-codegen-typescript`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, TypeMapper, etc.)
//! - [`model`] - The type model lowered from a schema (TypeModel, TypeRef, etc.)
//! - [`naming`] - Identifier normalization and naming hooks

pub mod builder;
pub mod language;
pub mod model;
pub mod naming;
