//! TypeScript code generator for the schemagen JSON Schema code generator.
//!
//! Emits one `.ts` module per schema: an `export interface` for every
//! object type, an `export enum` for every enumeration and an
//! `export type` alias for anything else.
//!
//! # Usage
//!
//! This crate is used internally by the `schemagen` CLI tool. You typically
//! don't need to use it directly.
//!
//! ```ignore
//! use schemagen_codegen::{language::LanguageCodegen, naming::DefaultNaming};
//! use schemagen_codegen_typescript::Generator;
//! use schemagen_schema::JsonSchema;
//!
//! let schema = JsonSchema::from_file("widget.schema.json")?;
//! let source = Generator::new().emit(&schema, "widget", &DefaultNaming)?;
//! println!("{}", source.content);
//! ```

mod code_file;
mod generator;
mod naming;
mod type_mapper;

pub mod ast;

pub use code_file::CodeFile;
pub use generator::Generator;
pub use naming::{is_identifier, property_key, string_literal};
pub use schemagen_codegen::language::{GeneratedSource, LanguageCodegen};
pub use type_mapper::TypeScriptTypeMapper;
