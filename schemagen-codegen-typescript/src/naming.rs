//! TypeScript-specific naming helpers.

/// Whether `name` can be used unquoted as a property key.
///
/// Only ASCII identifier characters plus `$` are accepted; anything else
/// is quoted, which is always valid.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Render `name` as a property key, quoting it when it isn't an identifier.
pub fn property_key(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        string_literal(name)
    }
}

/// Render `value` as a double-quoted string literal.
pub fn string_literal(value: &str) -> String {
    // A JSON string is a valid TypeScript string literal.
    serde_json::Value::from(value).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers_stay_bare() {
        assert_eq!(property_key("name"), "name");
        assert_eq!(property_key("_id"), "_id");
        assert_eq!(property_key("$schema"), "$schema");
        assert_eq!(property_key("class"), "class");
    }

    #[test]
    fn test_non_identifiers_are_quoted() {
        assert_eq!(property_key("content-type"), "\"content-type\"");
        assert_eq!(property_key("2fa"), "\"2fa\"");
        assert_eq!(property_key(""), "\"\"");
        assert_eq!(property_key("a\"b"), "\"a\\\"b\"");
        assert_eq!(property_key("日付"), "\"日付\"");
    }
}
