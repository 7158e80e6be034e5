//! Local `$ref` pointers.

use std::fmt;

/// A supported local reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Reference {
    /// `#`, the document root.
    Root,
    /// `#/definitions/<name>`
    Definitions(String),
    /// `#/$defs/<name>`
    Defs(String),
}

impl Reference {
    /// Parse a `$ref` value, returning `None` for anything that isn't a
    /// local reference to the root or to a top-level definition.
    pub fn parse(reference: &str) -> Option<Self> {
        if reference == "#" || reference == "#/" {
            return Some(Reference::Root);
        }
        if let Some(name) = reference.strip_prefix("#/definitions/") {
            return segment(name).map(Reference::Definitions);
        }
        if let Some(name) = reference.strip_prefix("#/$defs/") {
            return segment(name).map(Reference::Defs);
        }
        None
    }
}

/// Decode a single JSON pointer segment.
fn segment(raw: &str) -> Option<String> {
    if raw.is_empty() || raw.contains('/') {
        return None;
    }
    Some(raw.replace("~1", "/").replace("~0", "~"))
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reference::Root => write!(f, "#"),
            Reference::Definitions(name) => write!(f, "#/definitions/{}", encode(name)),
            Reference::Defs(name) => write!(f, "#/$defs/{}", encode(name)),
        }
    }
}

fn encode(name: &str) -> String {
    name.replace('~', "~0").replace('/', "~1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_local_references() {
        assert_eq!(Reference::parse("#"), Some(Reference::Root));
        assert_eq!(
            Reference::parse("#/definitions/Address"),
            Some(Reference::Definitions("Address".to_string()))
        );
        assert_eq!(
            Reference::parse("#/$defs/a~1b~0c"),
            Some(Reference::Defs("a/b~c".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_other_references() {
        assert_eq!(Reference::parse("other.json#/definitions/A"), None);
        assert_eq!(Reference::parse("#/properties/a"), None);
        assert_eq!(Reference::parse("#/definitions/"), None);
        assert_eq!(Reference::parse("#/definitions/A/properties/b"), None);
    }

    #[test]
    fn test_display_round_trips_escapes() {
        let reference = Reference::Defs("a/b~c".to_string());
        assert_eq!(reference.to_string(), "#/$defs/a~1b~0c");
    }
}
