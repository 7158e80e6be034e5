//! Naming strategies passed to emitters.

use schemagen_schema::JsonSchema;
use serde_json::Value;

use super::{
    EnumNameGenerator, IdentifierRules, PROPERTY_RULES, PropertyDescriptor, PropertyNameGenerator,
};

/// Type name used when a type name normalizes to nothing.
pub const ANONYMOUS_TYPE: &str = "Anonymous";

/// Callbacks an emitter uses to name the declarations it produces.
///
/// Emitters receive an implementation explicitly with every emission call
/// rather than reading global configuration.
pub trait NamingHooks {
    /// Name a generated type (root schema, definition, inline object or enum).
    fn type_name(&self, raw: &str) -> String;

    /// Name a generated property.
    fn property_name(&self, property: &PropertyDescriptor<'_>) -> String;

    /// Name one enum member.
    fn enum_member_name(
        &self,
        index: usize,
        name: Option<&str>,
        value: &Value,
        schema: &JsonSchema,
    ) -> String;

    /// Whether a property may not share the name of its enclosing type.
    fn reserves_type_name(&self) -> bool {
        false
    }
}

fn type_name(raw: &str) -> String {
    PROPERTY_RULES
        .normalize(raw)
        .unwrap_or_else(|| ANONYMOUS_TYPE.to_string())
}

/// Strict naming for targets whose members must all be identifiers.
///
/// Property and enum member names go through [`PropertyNameGenerator`] and
/// [`EnumNameGenerator`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ConventionNaming {
    properties: PropertyNameGenerator,
    enums: EnumNameGenerator,
}

impl ConventionNaming {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NamingHooks for ConventionNaming {
    fn type_name(&self, raw: &str) -> String {
        type_name(raw)
    }

    fn property_name(&self, property: &PropertyDescriptor<'_>) -> String {
        self.properties.generate(property)
    }

    fn enum_member_name(
        &self,
        index: usize,
        name: Option<&str>,
        value: &Value,
        schema: &JsonSchema,
    ) -> String {
        self.enums.generate(index, name, value, schema)
    }

    fn reserves_type_name(&self) -> bool {
        true
    }
}

/// Lenient naming: property keys are kept verbatim, leaving quoting to
/// the emitter.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultNaming;

impl NamingHooks for DefaultNaming {
    fn type_name(&self, raw: &str) -> String {
        type_name(raw)
    }

    fn property_name(&self, property: &PropertyDescriptor<'_>) -> String {
        property.name.to_string()
    }

    fn enum_member_name(
        &self,
        index: usize,
        name: Option<&str>,
        _value: &Value,
        _schema: &JsonSchema,
    ) -> String {
        IdentifierRules::PLAIN
            .normalize(name.unwrap_or_default())
            .unwrap_or_else(|| format!("Value{}", index))
    }
}
