//! Property naming.

use schemagen_schema::JsonSchema;

use super::identifier::{EMPTY_IDENTIFIER, IdentifierRules};

/// Rules for property names.
pub const PROPERTY_RULES: IdentifierRules = IdentifierRules {
    substitutions: &[],
    prefixes: &[],
    before_casing: &[
        ("\"", ""),
        ("@", ""),
        ("?", ""),
        ("$", ""),
        ("[", ""),
        ("]", ""),
        ("(", "_"),
        (")", ""),
        (".", "-"),
        ("=", "-"),
        ("+", "plus"),
    ],
    after_casing: &[("*", "Star"), (":", "_"), ("-", "_"), ("#", "_")],
};

/// A schema property as seen by a naming hook.
#[derive(Debug, Clone, Copy)]
pub struct PropertyDescriptor<'a> {
    /// The property key as declared in the schema.
    pub name: &'a str,
    /// The property's schema.
    pub schema: &'a JsonSchema,
    /// Whether the enclosing object lists the property as required.
    pub required: bool,
}

/// Generates the field name for one schema property.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertyNameGenerator;

impl PropertyNameGenerator {
    pub fn generate(&self, property: &PropertyDescriptor<'_>) -> String {
        PROPERTY_RULES
            .normalize(property.name)
            .unwrap_or_else(|| EMPTY_IDENTIFIER.to_string())
    }
}
