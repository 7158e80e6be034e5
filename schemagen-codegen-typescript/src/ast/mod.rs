//! TypeScript AST builders for interfaces, enums and type aliases.
//!
//! These provide a high-level API for constructing TypeScript syntax,
//! which can then be rendered via CodeBuilder.

mod enums;
mod interface;
mod types;

pub use enums::Enum;
pub use interface::{Interface, InterfaceField};
pub use types::TypeAlias;
