//! Identifier normalization.
//!
//! Turns arbitrary schema tokens (property keys, enum values) into
//! UpperCamelCase identifiers made only of the Unicode categories
//! Lu, Ll, Lt, Lm, Lo, Nl, Mn, Mc, Nd, Pc and Cf.

use std::sync::LazyLock;

use regex::Regex;
use schemagen_core::{snake_to_camel, to_upper_camel_case};

/// Identifier returned for empty input.
pub const EMPTY_IDENTIFIER: &str = "Empty";

static INVALID_CHARACTERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\p{Lu}\p{Ll}\p{Lt}\p{Lm}\p{Lo}\p{Nl}\p{Mn}\p{Mc}\p{Nd}\p{Pc}\p{Cf}]")
        .expect("identifier character class is a valid regex")
});

/// A replacement table: `(from, to)` pairs applied in order.
pub type Replacements = &'static [(&'static str, &'static str)];

/// Rules that parameterise [`IdentifierRules::normalize`].
///
/// Each table is applied in declaration order.
#[derive(Debug, Clone, Copy)]
pub struct IdentifierRules {
    /// Exact-match substitutions for the whole token.
    pub substitutions: Replacements,
    /// Prefix rewrites, each checked against the current string.
    pub prefixes: Replacements,
    /// Replacements applied before camel-casing.
    pub before_casing: Replacements,
    /// Replacements applied to the camel-cased string.
    pub after_casing: Replacements,
}

impl IdentifierRules {
    /// No substitutions or replacements: casing and the character
    /// allowlist only.
    pub const PLAIN: Self = Self {
        substitutions: &[],
        prefixes: &[],
        before_casing: &[],
        after_casing: &[],
    };

    /// Normalize `raw` into an identifier.
    ///
    /// Empty input yields [`EMPTY_IDENTIFIER`]. Returns `None` when every
    /// character of a non-empty token is stripped, leaving callers to pick
    /// a fallback.
    pub fn normalize(&self, raw: &str) -> Option<String> {
        if raw.is_empty() {
            return Some(EMPTY_IDENTIFIER.to_string());
        }

        let mut name = self
            .substitutions
            .iter()
            .find(|(from, _)| *from == raw)
            .map_or_else(|| raw.to_string(), |(_, to)| to.to_string());

        for (prefix, replacement) in self.prefixes {
            if let Some(rest) = name.strip_prefix(prefix) {
                name = format!("{}{}", replacement, rest);
            }
        }

        let name = replace_all(&name, self.before_casing);
        let cased = replace_all(&to_upper_camel_case(&name), self.after_casing);
        finish(&cased)
    }
}

fn replace_all(s: &str, replacements: Replacements) -> String {
    replacements
        .iter()
        .fold(s.to_string(), |acc, (from, to)| acc.replace(from, to))
}

/// Replace disallowed characters with `_`, collapse underscore segments
/// into camel case and guard against a leading digit.
fn finish(cased: &str) -> Option<String> {
    let allowed = INVALID_CHARACTERS.replace_all(cased, "_");
    let collapsed = snake_to_camel(&allowed);

    match collapsed.chars().next() {
        None => None,
        Some(first) if first.is_numeric() => Some(format!("_{}", collapsed)),
        Some(_) => Some(collapsed),
    }
}

/// Whether every character of `name` is in the identifier allowlist.
pub fn is_sanitized(name: &str) -> bool {
    !name.is_empty() && !INVALID_CHARACTERS.is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(IdentifierRules::PLAIN.normalize(""), Some("Empty".to_string()));
    }

    #[test]
    fn test_plain_casing() {
        let rules = IdentifierRules::PLAIN;
        assert_eq!(rules.normalize("hello").as_deref(), Some("Hello"));
        assert_eq!(rules.normalize("hello world").as_deref(), Some("HelloWorld"));
        assert_eq!(rules.normalize("snake_case_name").as_deref(), Some("SnakeCaseName"));
        assert_eq!(rules.normalize("kebab-case").as_deref(), Some("KebabCase"));
        assert_eq!(rules.normalize("a.b,c").as_deref(), Some("ABC"));
    }

    #[test]
    fn test_disallowed_characters_degenerate_to_none() {
        let rules = IdentifierRules::PLAIN;
        assert_eq!(rules.normalize("%%%"), None);
        assert_eq!(rules.normalize("___"), None);
        assert_eq!(rules.normalize("¼"), None);
    }

    #[test]
    fn test_leading_digit_is_prefixed() {
        let rules = IdentifierRules::PLAIN;
        assert_eq!(rules.normalize("1").as_deref(), Some("_1"));
        assert_eq!(rules.normalize("2fa").as_deref(), Some("_2fa"));
        assert_eq!(rules.normalize("v2").as_deref(), Some("V2"));
    }

    #[test]
    fn test_mixed_scripts() {
        let rules = IdentifierRules::PLAIN;
        assert_eq!(rules.normalize("café au lait").as_deref(), Some("CaféAuLait"));
        assert_eq!(rules.normalize("日本-語").as_deref(), Some("日本語"));
        assert_eq!(rules.normalize("naïve🙂smile").as_deref(), Some("NaïveSmile"));
    }

    #[test]
    fn test_tables_apply_in_order() {
        const RULES: IdentifierRules = IdentifierRules {
            substitutions: &[("=", "Eq")],
            prefixes: &[("-", "Minus"), ("+", "Plus")],
            before_casing: &[("+", "plus")],
            after_casing: &[("*", "Star")],
        };
        assert_eq!(RULES.normalize("=").as_deref(), Some("Eq"));
        // Prefixes are checked in order, so the `+` left behind by the first
        // rewrite is only caught by the replacement table.
        assert_eq!(RULES.normalize("-+a").as_deref(), Some("Minusplusa"));
        assert_eq!(RULES.normalize("a*").as_deref(), Some("AStar"));
    }

    #[test]
    fn test_totality_over_assorted_tokens() {
        let tokens = [
            "", " ", "\"", "a b c", "--", "__", "!@#$%^&*()", "ελληνικά", "x\u{200d}y",
            "tab\there", "new\nline", "1.5", "-1", "a\u{301}", "ǅ",
        ];
        for token in tokens {
            let normalized = IdentifierRules::PLAIN.normalize(token);
            if let Some(name) = normalized {
                assert!(is_sanitized(&name), "{token:?} produced {name:?}");
                assert!(!name.starts_with(|c: char| c.is_ascii_digit()));
            }
        }
    }
}
