//! TypeScript type mapper implementation.

use schemagen_codegen::{language::TypeMapper, model::TypeRef};

/// TypeScript type mapper implementation.
pub struct TypeScriptTypeMapper;

impl TypeMapper for TypeScriptTypeMapper {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn map_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::String | TypeRef::DateTime => "string".to_string(),
            TypeRef::Integer | TypeRef::Number => "number".to_string(),
            TypeRef::Boolean => "boolean".to_string(),
            TypeRef::Any => "any".to_string(),
            TypeRef::Array(inner) => match inner.as_ref() {
                TypeRef::Nullable(_) => format!("({})[]", self.map_type(inner)),
                _ => format!("{}[]", self.map_type(inner)),
            },
            TypeRef::Map(inner) => format!("{{ [key: string]: {} }}", self.map_type(inner)),
            TypeRef::Named(name) => name.clone(),
            TypeRef::Nullable(inner) => format!("{} | null", self.map_type(inner)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typescript_primitive_types() {
        let mapper = TypeScriptTypeMapper;

        assert_eq!(mapper.map_type(&TypeRef::String), "string");
        assert_eq!(mapper.map_type(&TypeRef::DateTime), "string");
        assert_eq!(mapper.map_type(&TypeRef::Integer), "number");
        assert_eq!(mapper.map_type(&TypeRef::Number), "number");
        assert_eq!(mapper.map_type(&TypeRef::Boolean), "boolean");
        assert_eq!(mapper.map_type(&TypeRef::Any), "any");
    }

    #[test]
    fn test_typescript_composite_types() {
        let mapper = TypeScriptTypeMapper;

        assert_eq!(
            mapper.map_type(&TypeRef::array(TypeRef::named("Item"))),
            "Item[]"
        );
        assert_eq!(
            mapper.map_type(&TypeRef::array(TypeRef::String.nullable())),
            "(string | null)[]"
        );
        assert_eq!(
            mapper.map_type(&TypeRef::map(TypeRef::Number)),
            "{ [key: string]: number }"
        );
        assert_eq!(
            mapper.map_type(&TypeRef::array(TypeRef::Integer).nullable()),
            "number[] | null"
        );
    }
}
