//! Identifier generation for emitted declarations.
//!
//! - [`IdentifierRules`] - The normalization algorithm and its tables
//! - [`EnumNameGenerator`] - Enum member names
//! - [`PropertyNameGenerator`] - Property names
//! - [`NamingHooks`] - Strategy handed to emitters
//!   ([`ConventionNaming`], [`DefaultNaming`])

mod enum_name;
mod hooks;
mod identifier;
mod property_name;

pub use enum_name::{ENUM_MEMBER_RULES, EnumNameGenerator};
pub use hooks::{ANONYMOUS_TYPE, ConventionNaming, DefaultNaming, NamingHooks};
pub use identifier::{EMPTY_IDENTIFIER, IdentifierRules, Replacements, is_sanitized};
pub use property_name::{PROPERTY_RULES, PropertyDescriptor, PropertyNameGenerator};
