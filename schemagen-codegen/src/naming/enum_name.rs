//! Enum member naming.

use schemagen_schema::JsonSchema;
use serde_json::Value;

use super::identifier::{EMPTY_IDENTIFIER, IdentifierRules};

/// Rules for enum member names.
///
/// Comparison operators map to mnemonic names, a leading sign is spelled
/// out, and `:`/`"` are remapped before casing.
pub const ENUM_MEMBER_RULES: IdentifierRules = IdentifierRules {
    substitutions: &[
        ("=", "Eq"),
        ("!=", "Ne"),
        (">", "Gt"),
        ("<", "Lt"),
        (">=", "Ge"),
        ("<=", "Le"),
        ("~=", "Approx"),
    ],
    prefixes: &[("-", "Minus"), ("+", "Plus"), ("_-", "__")],
    before_casing: &[(":", "-"), ("\"", "")],
    after_casing: &[],
};

/// Generates the member name for one enum value.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumNameGenerator;

impl EnumNameGenerator {
    /// Generate the member name for the value at `index`.
    ///
    /// `name` is the declared name (from `x-enumNames`, or the value's
    /// text). When normalization strips every character the positional
    /// name `Value{index}` is used instead.
    pub fn generate(
        &self,
        index: usize,
        name: Option<&str>,
        _value: &Value,
        _schema: &JsonSchema,
    ) -> String {
        let Some(name) = name.filter(|n| !n.is_empty()) else {
            return EMPTY_IDENTIFIER.to_string();
        };

        ENUM_MEMBER_RULES
            .normalize(name)
            .unwrap_or_else(|| format!("Value{}", index))
    }
}
