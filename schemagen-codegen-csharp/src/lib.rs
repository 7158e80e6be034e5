//! C# code generator for the schemagen JSON Schema code generator.
//!
//! Emits one `.cs` file per schema holding a single namespace with a
//! `public partial class` per object type and a `public enum` per
//! enumeration, annotated for Newtonsoft.Json. This is the
//! convention-sensitive target: it is driven with
//! [`ConventionNaming`](schemagen_codegen::naming::ConventionNaming) so every
//! member name is a valid C# identifier.

mod csharp_file;
mod generator;
mod type_mapper;

pub mod ast;

pub use ast::{CSharpAttr, Class, Enum, Member, Property, Required};
pub use csharp_file::CSharpFile;
pub use generator::{DEFAULT_NAMESPACE, Generator};
pub use schemagen_codegen::language::{GeneratedSource, LanguageCodegen};
pub use type_mapper::CSharpTypeMapper;
