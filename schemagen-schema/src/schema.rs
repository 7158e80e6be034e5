//! JSON Schema document model.
//!
//! Covers the subset of JSON Schema the generators understand: object
//! properties, arrays, maps, enums, primitive types and local `$ref`s.
//! Unknown keywords are ignored.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::Reference;

/// A primitive JSON Schema type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    String,
    Integer,
    Number,
    Boolean,
    Object,
    Array,
    Null,
}

/// The `type` keyword: a single type or a list of types.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TypeSet {
    Single(SchemaType),
    Multiple(Vec<SchemaType>),
}

impl TypeSet {
    /// All types in declaration order.
    pub fn types(&self) -> &[SchemaType] {
        match self {
            TypeSet::Single(ty) => std::slice::from_ref(ty),
            TypeSet::Multiple(types) => types,
        }
    }

    /// Whether `null` is one of the allowed types.
    pub fn is_nullable(&self) -> bool {
        self.types().contains(&SchemaType::Null)
    }

    /// The allowed types other than `null`.
    pub fn non_null(&self) -> Vec<SchemaType> {
        self.types()
            .iter()
            .copied()
            .filter(|ty| *ty != SchemaType::Null)
            .collect()
    }
}

/// The `additionalProperties` keyword.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    Allowed(bool),
    Schema(Box<JsonSchema>),
}

/// A JSON Schema document or subschema.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct JsonSchema {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub schema_type: Option<TypeSet>,
    pub format: Option<String>,
    pub properties: IndexMap<String, JsonSchema>,
    pub required: Vec<String>,
    pub items: Option<Box<JsonSchema>>,
    #[serde(rename = "additionalProperties")]
    pub additional_properties: Option<AdditionalProperties>,
    #[serde(rename = "enum")]
    pub enum_values: Vec<Value>,
    /// Display names for enum members, index-aligned with `enum_values`.
    #[serde(rename = "x-enumNames")]
    pub enum_names: Vec<String>,
    #[serde(rename = "$ref")]
    pub reference: Option<String>,
    pub definitions: IndexMap<String, JsonSchema>,
    #[serde(rename = "$defs")]
    pub defs: IndexMap<String, JsonSchema>,
}

impl JsonSchema {
    /// Whether `name` is listed in `required`.
    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }

    /// Whether this schema declares an enumeration.
    pub fn is_enum(&self) -> bool {
        !self.enum_values.is_empty()
    }

    /// Whether this schema describes an object with declared properties.
    pub fn is_object(&self) -> bool {
        !self.properties.is_empty()
            || self
                .schema_type
                .as_ref()
                .is_some_and(|t| t.non_null() == [SchemaType::Object])
    }

    /// Whether `null` is an allowed value.
    pub fn is_nullable(&self) -> bool {
        self.schema_type.as_ref().is_some_and(TypeSet::is_nullable)
            || self.enum_values.iter().any(Value::is_null)
    }

    /// All named definitions, `definitions` first then `$defs`, each paired
    /// with the reference that points at it.
    pub fn all_definitions(&self) -> impl Iterator<Item = (Reference, &str, &JsonSchema)> {
        let definitions = self.definitions.iter().map(|(name, schema)| {
            (
                Reference::Definitions(name.clone()),
                name.as_str(),
                schema,
            )
        });
        let defs = self
            .defs
            .iter()
            .map(|(name, schema)| (Reference::Defs(name.clone()), name.as_str(), schema));
        definitions.chain(defs)
    }

    /// Look up the definition a local reference points at.
    ///
    /// Returns `None` for [`Reference::Root`] and for unknown names.
    pub fn definition(&self, reference: &Reference) -> Option<&JsonSchema> {
        match reference {
            Reference::Root => None,
            Reference::Definitions(name) => self.definitions.get(name),
            Reference::Defs(name) => self.defs.get(name),
        }
    }

    /// Visit every `$ref` in this schema and its subschemas.
    pub fn visit_references<'a>(&'a self, visit: &mut impl FnMut(&'a str)) {
        if let Some(reference) = &self.reference {
            visit(reference);
        }
        for schema in self.properties.values() {
            schema.visit_references(visit);
        }
        if let Some(items) = &self.items {
            items.visit_references(visit);
        }
        if let Some(AdditionalProperties::Schema(schema)) = &self.additional_properties {
            schema.visit_references(visit);
        }
        for schema in self.definitions.values().chain(self.defs.values()) {
            schema.visit_references(visit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema(json: &str) -> JsonSchema {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_type_set_single_and_multiple() {
        let single = schema(r#"{"type": "string"}"#);
        assert_eq!(
            single.schema_type.unwrap().types(),
            &[SchemaType::String]
        );

        let multiple = schema(r#"{"type": ["integer", "null"]}"#);
        let types = multiple.schema_type.unwrap();
        assert!(types.is_nullable());
        assert_eq!(types.non_null(), vec![SchemaType::Integer]);
    }

    #[test]
    fn test_properties_keep_declaration_order() {
        let s = schema(r#"{"properties": {"zeta": {}, "alpha": {}, "mid": {}}}"#);
        let keys: Vec<&str> = s.properties.keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
        assert!(s.is_object());
    }

    #[test]
    fn test_additional_properties_variants() {
        let allowed = schema(r#"{"additionalProperties": false}"#);
        assert!(matches!(
            allowed.additional_properties,
            Some(AdditionalProperties::Allowed(false))
        ));

        let typed = schema(r#"{"additionalProperties": {"type": "number"}}"#);
        assert!(matches!(
            typed.additional_properties,
            Some(AdditionalProperties::Schema(_))
        ));
    }

    #[test]
    fn test_enum_and_names() {
        let s = schema(r#"{"enum": ["=", "!=", null], "x-enumNames": ["Equal"]}"#);
        assert!(s.is_enum());
        assert!(s.is_nullable());
        assert_eq!(s.enum_names, ["Equal"]);
    }

    #[test]
    fn test_definitions_and_defs() {
        let s = schema(
            r#"{
                "definitions": {"A": {"type": "string"}},
                "$defs": {"B": {"type": "integer"}}
            }"#,
        );
        let names: Vec<&str> = s.all_definitions().map(|(_, name, _)| name).collect();
        assert_eq!(names, ["A", "B"]);
        assert!(
            s.definition(&Reference::Defs("B".to_string()))
                .is_some()
        );
        assert!(s.definition(&Reference::Root).is_none());
    }

    #[test]
    fn test_visit_references() {
        let s = schema(
            r##"{
                "properties": {
                    "a": {"$ref": "#/definitions/A"},
                    "list": {"items": {"$ref": "#"}}
                },
                "definitions": {"A": {"additionalProperties": {"$ref": "#/$defs/B"}}}
            }"##,
        );
        let mut refs = Vec::new();
        s.visit_references(&mut |r| refs.push(r.to_string()));
        assert_eq!(refs, ["#/definitions/A", "#", "#/$defs/B"]);
    }
}
