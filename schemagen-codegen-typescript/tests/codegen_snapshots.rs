//! Snapshot tests for TypeScript code generation.
//!
//! These tests verify that the generated TypeScript code matches expected output.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use schemagen_codegen::naming::DefaultNaming;
use schemagen_codegen_typescript::{Generator, LanguageCodegen};
use schemagen_schema::JsonSchema;

/// Generate TypeScript for a schema, naming the root after `stem`.
fn generate(schema_json: &str, stem: &str) -> String {
    let schema: JsonSchema = schema_json.parse().expect("Failed to parse schema");
    let source = Generator::new()
        .emit(&schema, stem, &DefaultNaming)
        .expect("Emission failed");
    assert!(source.warnings.is_empty(), "{:?}", source.warnings);
    source.content
}

const ORDER_SCHEMA: &str = r##"{
    "title": "Order",
    "description": "A customer order",
    "type": "object",
    "required": ["id", "lines"],
    "properties": {
        "id": {"type": "string"},
        "status": {"enum": ["pending", "shipped", null]},
        "lines": {"type": "array", "items": {"$ref": "#/definitions/line"}},
        "placed-at": {"type": "string", "format": "date-time"},
        "metadata": {"type": "object", "additionalProperties": {"type": "string"}},
        "shipping": {
            "description": "Where to ship",
            "properties": {
                "street": {"type": "string"},
                "zip": {"type": ["string", "null"]}
            }
        }
    },
    "definitions": {
        "line": {
            "type": "object",
            "required": ["sku", "quantity"],
            "properties": {
                "sku": {"type": "string"},
                "quantity": {"type": "integer", "description": "Units ordered"}
            }
        }
    }
}"##;

#[test]
fn test_order_module() {
    let code = generate(ORDER_SCHEMA, "order");
    insta::assert_snapshot!("order", code);
}

#[test]
fn test_operator_enum_module() {
    let code = generate(
        r#"{
            "title": "comparison",
            "type": "object",
            "properties": {
                "op": {"enum": ["=", "!=", ">="]},
                "priority": {"enum": [1, 2, 3], "x-enumNames": ["low", "medium", "high"]}
            }
        }"#,
        "ignored",
    );
    insta::assert_snapshot!("operator_enum", code);
}

#[test]
fn test_array_root_is_an_alias() {
    let code = generate(
        r#"{"type": "array", "items": {"properties": {"name": {"type": "string"}}}}"#,
        "tag-list",
    );
    assert!(code.contains("export type TagList = TagListItem[];\n"));
    assert!(code.contains("export interface TagListItem {\n    name?: string;\n}\n"));
}

#[test]
fn test_output_is_deterministic() {
    assert_eq!(generate(ORDER_SCHEMA, "order"), generate(ORDER_SCHEMA, "order"));
}
