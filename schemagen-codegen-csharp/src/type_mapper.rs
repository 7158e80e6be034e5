//! C# type mapper implementation.

use std::collections::HashSet;

use schemagen_codegen::{
    language::TypeMapper,
    model::{TypeDecl, TypeModel, TypeRef},
};

/// C# type mapper implementation.
///
/// Needs the enums of the model being rendered: enums are value types, so
/// they take a `?` when nullable or optional.
#[derive(Debug, Clone, Default)]
pub struct CSharpTypeMapper {
    enums: HashSet<String>,
}

impl CSharpTypeMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mapper that knows the enums declared in `model`.
    pub fn for_model(model: &TypeModel) -> Self {
        let enums = model
            .types
            .iter()
            .filter_map(|decl| match decl {
                TypeDecl::Enum(e) => Some(e.name.clone()),
                _ => None,
            })
            .collect();
        Self { enums }
    }

    /// Whether `ty` maps to a C# value type.
    pub fn is_value_type(&self, ty: &TypeRef) -> bool {
        match ty {
            TypeRef::Integer | TypeRef::Number | TypeRef::Boolean | TypeRef::DateTime => true,
            TypeRef::Named(name) => self.enums.contains(name),
            _ => false,
        }
    }
}

impl TypeMapper for CSharpTypeMapper {
    fn language(&self) -> &'static str {
        "csharp"
    }

    fn map_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::String => "string".to_string(),
            TypeRef::Integer => "long".to_string(),
            TypeRef::Number => "double".to_string(),
            TypeRef::Boolean => "bool".to_string(),
            TypeRef::DateTime => "System.DateTimeOffset".to_string(),
            TypeRef::Any => "object".to_string(),
            TypeRef::Array(inner) => format!(
                "System.Collections.Generic.ICollection<{}>",
                self.map_type(inner)
            ),
            TypeRef::Map(inner) => format!(
                "System.Collections.Generic.IDictionary<string, {}>",
                self.map_type(inner)
            ),
            TypeRef::Named(name) => name.clone(),
            TypeRef::Nullable(inner) if self.is_value_type(inner) => {
                format!("{}?", self.map_type(inner))
            }
            TypeRef::Nullable(inner) => self.map_type(inner),
        }
    }

    fn map_optional_type(&self, ty: &TypeRef) -> String {
        if self.is_value_type(ty) {
            format!("{}?", self.map_type(ty))
        } else {
            self.map_type(ty)
        }
    }
}

#[cfg(test)]
mod tests {
    use schemagen_codegen::model::{EnumDecl, EnumMember, EnumValue};

    use super::*;

    #[test]
    fn test_csharp_primitive_types() {
        let mapper = CSharpTypeMapper::new();

        assert_eq!(mapper.map_type(&TypeRef::String), "string");
        assert_eq!(mapper.map_type(&TypeRef::Integer), "long");
        assert_eq!(mapper.map_type(&TypeRef::Number), "double");
        assert_eq!(mapper.map_type(&TypeRef::Boolean), "bool");
        assert_eq!(mapper.map_type(&TypeRef::DateTime), "System.DateTimeOffset");
        assert_eq!(mapper.map_type(&TypeRef::Any), "object");
    }

    #[test]
    fn test_csharp_nullable_types() {
        let mapper = CSharpTypeMapper::new();

        assert_eq!(mapper.map_type(&TypeRef::Integer.nullable()), "long?");
        assert_eq!(mapper.map_type(&TypeRef::String.nullable()), "string");
        assert_eq!(mapper.map_optional_type(&TypeRef::Boolean), "bool?");
        assert_eq!(mapper.map_optional_type(&TypeRef::named("Address")), "Address");
    }

    #[test]
    fn test_csharp_collections() {
        let mapper = CSharpTypeMapper::new();

        assert_eq!(
            mapper.map_type(&TypeRef::array(TypeRef::named("Line"))),
            "System.Collections.Generic.ICollection<Line>"
        );
        assert_eq!(
            mapper.map_type(&TypeRef::map(TypeRef::Integer.nullable())),
            "System.Collections.Generic.IDictionary<string, long?>"
        );
    }

    #[test]
    fn test_enums_are_value_types() {
        let model = TypeModel {
            root: "Root".to_string(),
            types: vec![TypeDecl::Enum(EnumDecl {
                name: "Status".to_string(),
                description: None,
                members: vec![EnumMember {
                    name: "Open".to_string(),
                    value: EnumValue::String("open".to_string()),
                }],
            })],
            warnings: Vec::new(),
        };
        let mapper = CSharpTypeMapper::for_model(&model);

        assert_eq!(mapper.map_type(&TypeRef::named("Status").nullable()), "Status?");
        assert_eq!(mapper.map_optional_type(&TypeRef::named("Status")), "Status?");
    }
}
