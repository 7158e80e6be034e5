//! Schema parsing from files and strings.

use std::{path::Path, str::FromStr};

use crate::{Error, JsonSchema, Reference, Result, error::SourceContext};

impl FromStr for JsonSchema {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_schema(s, "schema.json")
    }
}

impl JsonSchema {
    /// Parse a schema document from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_schema(&content, &path.display().to_string())
    }

    /// Parse a schema document from a string with a custom filename for
    /// error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_schema(content, filename)
    }
}

/// Parse a schema from content with the given filename for error reporting.
///
/// A leading byte order mark is ignored.
pub fn parse_schema(content: &str, filename: &str) -> Result<JsonSchema> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let source_ctx = SourceContext::new(content, filename);
    let schema: JsonSchema =
        serde_json::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_references(&schema, &source_ctx)?;
    Ok(schema)
}

/// Every `$ref` must point at the root or at a root-level definition.
fn validate_references(schema: &JsonSchema, ctx: &SourceContext) -> Result<()> {
    let mut references = Vec::new();
    schema.visit_references(&mut |r| references.push(r));

    for raw in references {
        let reference = Reference::parse(raw).ok_or_else(|| ctx.unsupported_reference(raw))?;
        if reference != Reference::Root && schema.definition(&reference).is_none() {
            return Err(ctx.unresolved_reference(raw));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_parse_valid_schema() {
        let schema: JsonSchema = r##"{
            "title": "Example",
            "type": "object",
            "properties": {
                "address": {"$ref": "#/definitions/address"}
            },
            "definitions": {
                "address": {"type": "object", "properties": {"city": {"type": "string"}}}
            }
        }"##
        .parse()
        .unwrap();

        assert_eq!(schema.title.as_deref(), Some("Example"));
        assert_eq!(schema.properties.len(), 1);
    }

    #[test]
    fn test_parse_malformed_json_reports_span() {
        let err = parse_schema("{\n  \"type\": \"object\",\n  oops\n}", "bad.json").unwrap_err();
        match *err {
            Error::Parse { span, filename, .. } => {
                assert_eq!(filename, "bad.json");
                assert!(span.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_type_name() {
        let err = parse_schema(r#"{"type": "text"}"#, "a.json").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unresolved_reference() {
        let err = parse_schema(
            r##"{"properties": {"a": {"$ref": "#/definitions/Missing"}}}"##,
            "a.json",
        )
        .unwrap_err();
        match *err {
            Error::UnresolvedReference { reference, .. } => {
                assert_eq!(reference, "#/definitions/Missing");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unsupported_reference() {
        let err = parse_schema(
            r#"{"properties": {"a": {"$ref": "https://example.com/a.json"}}}"#,
            "a.json",
        )
        .unwrap_err();
        assert!(matches!(*err, Error::UnsupportedReference { .. }));
    }

    #[test]
    fn test_root_reference_is_valid() {
        let schema = parse_schema(
            r##"{"properties": {"children": {"type": "array", "items": {"$ref": "#"}}}}"##,
            "tree.json",
        );
        assert!(schema.is_ok());
    }

    #[test]
    fn test_from_file_missing() {
        let temp = TempDir::new().unwrap();
        let err = JsonSchema::from_file(temp.path().join("missing.json")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_from_file_with_byte_order_mark() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("widget.json");
        fs::write(
            &path,
            "\u{feff}{\"type\": \"object\", \"properties\": {\"id\": {\"type\": \"integer\"}}}",
        )
        .unwrap();

        let schema = JsonSchema::from_file(&path).unwrap();
        assert_eq!(schema.properties.len(), 1);
    }

    #[test]
    fn test_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("widget.schema.json");
        fs::write(&path, r#"{"type": "object", "properties": {"id": {"type": "integer"}}}"#)
            .unwrap();

        let schema = JsonSchema::from_file(&path).unwrap();
        assert!(schema.is_object());
    }
}
