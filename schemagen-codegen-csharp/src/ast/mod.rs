//! C# AST builders for classes and enums.

mod attrs;
mod class;
mod enums;

pub use attrs::{CSharpAttr, Required, string_literal, verbatim_literal};
pub use class::{Class, Property};
pub use enums::{Enum, Member};
