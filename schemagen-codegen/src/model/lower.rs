//! Lowering a [`JsonSchema`] into a [`TypeModel`].

use std::collections::HashMap;

use eyre::{Result, bail, eyre};
use schemagen_schema::{AdditionalProperties, JsonSchema, Reference, SchemaType};
use serde_json::{Number, Value};

use super::{
    AliasDecl, EnumDecl, EnumMember, EnumValue, ObjectDecl, PropertyDecl, TypeDecl, TypeModel,
    TypeRef, UniqueNames,
};
use crate::naming::{NamingHooks, PropertyDescriptor};

impl TypeModel {
    /// Lower `schema` into declarations named through `naming`.
    ///
    /// The root type is named after the schema's `title`, or `fallback_name`
    /// (usually the file stem) when there is none. Names that collide after
    /// normalization are disambiguated with a numeric suffix and reported in
    /// [`TypeModel::warnings`].
    pub fn lower(
        schema: &JsonSchema,
        fallback_name: &str,
        naming: &dyn NamingHooks,
    ) -> Result<Self> {
        Lowerer::new(schema, naming).lower(fallback_name)
    }
}

struct Lowerer<'a> {
    document: &'a JsonSchema,
    naming: &'a dyn NamingHooks,
    type_names: UniqueNames,
    root_name: String,
    definitions: HashMap<Reference, String>,
    inline: Vec<TypeDecl>,
    warnings: Vec<String>,
}

impl<'a> Lowerer<'a> {
    fn new(document: &'a JsonSchema, naming: &'a dyn NamingHooks) -> Self {
        Self {
            document,
            naming,
            type_names: UniqueNames::new(),
            root_name: String::new(),
            definitions: HashMap::new(),
            inline: Vec::new(),
            warnings: Vec::new(),
        }
    }

    fn lower(mut self, fallback_name: &str) -> Result<TypeModel> {
        let document = self.document;
        let root_raw = document.title.as_deref().unwrap_or(fallback_name);
        self.root_name = self.claim_type_name(root_raw);

        // Register every definition up front so references resolve regardless
        // of declaration order.
        for (reference, raw, _) in document.all_definitions() {
            let name = self.claim_type_name(raw);
            self.definitions.insert(reference, name);
        }

        let mut types = Vec::new();
        let root_name = self.root_name.clone();
        types.push(self.declare(&root_name, document)?);

        for (reference, _, schema) in document.all_definitions() {
            let name = self.definitions[&reference].clone();
            types.push(self.declare(&name, schema)?);
        }

        types.append(&mut self.inline);

        Ok(TypeModel {
            root: self.root_name,
            types,
            warnings: self.warnings,
        })
    }

    fn claim_type_name(&mut self, raw: &str) -> String {
        let preferred = self.naming.type_name(raw);
        let name = self.type_names.claim(&preferred);
        if name != preferred {
            self.warn(format!(
                "type name '{}' for '{}' is already taken, using '{}'",
                preferred, raw, name
            ));
        }
        name
    }

    fn warn(&mut self, message: String) {
        tracing::warn!("{}", message);
        self.warnings.push(message);
    }

    /// Declare a named top-level type for `schema`.
    fn declare(&mut self, name: &str, schema: &JsonSchema) -> Result<TypeDecl> {
        if schema.reference.is_none() && schema.is_enum() {
            return Ok(TypeDecl::Enum(self.lower_enum(name, schema)?));
        }

        if schema.reference.is_none() && schema.is_object() && !is_pure_map(schema) {
            return Ok(TypeDecl::Object(self.lower_object(name, schema)?));
        }

        let target = self.resolve(schema, name)?;
        Ok(TypeDecl::Alias(AliasDecl {
            name: name.to_string(),
            description: schema.description.clone(),
            target,
        }))
    }

    fn lower_object(&mut self, name: &str, schema: &JsonSchema) -> Result<ObjectDecl> {
        let mut member_names = UniqueNames::new();
        if self.naming.reserves_type_name() {
            member_names.claim(name);
        }
        let mut properties = Vec::with_capacity(schema.properties.len());

        for (key, property) in &schema.properties {
            let required = schema.is_required(key);
            let preferred = self.naming.property_name(&PropertyDescriptor {
                name: key,
                schema: property,
                required,
            });
            let member = member_names.claim(&preferred);
            if member != preferred {
                self.warn(format!(
                    "property '{}' of '{}' collides on '{}', using '{}'",
                    key, name, preferred, member
                ));
            }

            let ty = self.resolve(property, key)?;
            properties.push(PropertyDecl {
                json_name: key.clone(),
                name: member,
                ty,
                required,
                description: property.description.clone(),
            });
        }

        Ok(ObjectDecl {
            name: name.to_string(),
            description: schema.description.clone(),
            properties,
        })
    }

    fn lower_enum(&mut self, name: &str, schema: &JsonSchema) -> Result<EnumDecl> {
        let mut member_names = UniqueNames::new();
        let mut members = Vec::new();
        let mut integers = 0;

        for (index, value) in schema.enum_values.iter().enumerate() {
            let literal = match value {
                Value::Null => continue,
                Value::String(s) => EnumValue::String(s.clone()),
                Value::Number(n) => match integral(n) {
                    Some(n) => {
                        integers += 1;
                        EnumValue::Integer(n)
                    }
                    None => bail!("enum '{}' has non-integer number {}", name, n),
                },
                other => bail!("enum '{}' has unsupported value {}", name, other),
            };

            let raw = schema
                .enum_names
                .get(index)
                .cloned()
                .unwrap_or_else(|| match &literal {
                    EnumValue::String(s) => s.clone(),
                    EnumValue::Integer(n) => n.to_string(),
                });
            let preferred = self
                .naming
                .enum_member_name(index, Some(&raw), value, schema);
            let member = member_names.claim(&preferred);
            if member != preferred {
                self.warn(format!(
                    "enum value {} of '{}' collides on '{}', using '{}'",
                    value, name, preferred, member
                ));
            }

            members.push(EnumMember {
                name: member,
                value: literal,
            });
        }

        if members.is_empty() {
            bail!("enum '{}' has no non-null values", name);
        }
        if integers != 0 && integers != members.len() {
            bail!("enum '{}' mixes string and integer values", name);
        }

        Ok(EnumDecl {
            name: name.to_string(),
            description: schema.description.clone(),
            members,
        })
    }

    /// Resolve the type of a property, item or alias target. `hint` names
    /// any inline type that has to be declared along the way.
    fn resolve(&mut self, schema: &JsonSchema, hint: &str) -> Result<TypeRef> {
        if let Some(raw) = &schema.reference {
            return self.resolve_reference(raw);
        }

        let ty = if schema.is_enum() || !schema.properties.is_empty() {
            self.declare_inline(hint, schema)?
        } else {
            self.resolve_primitive(schema, hint)?
        };

        Ok(if schema.is_nullable() { ty.nullable() } else { ty })
    }

    fn resolve_reference(&self, raw: &str) -> Result<TypeRef> {
        let reference =
            Reference::parse(raw).ok_or_else(|| eyre!("unsupported reference '{}'", raw))?;
        if reference == Reference::Root {
            return Ok(TypeRef::named(&self.root_name));
        }

        self.definitions
            .get(&reference)
            .map(TypeRef::named)
            .ok_or_else(|| eyre!("unresolved reference '{}'", raw))
    }

    fn declare_inline(&mut self, hint: &str, schema: &JsonSchema) -> Result<TypeRef> {
        let name = self.claim_type_name(hint);
        let decl = if schema.is_enum() {
            TypeDecl::Enum(self.lower_enum(&name, schema)?)
        } else {
            TypeDecl::Object(self.lower_object(&name, schema)?)
        };
        self.inline.push(decl);
        Ok(TypeRef::Named(name))
    }

    fn resolve_primitive(&mut self, schema: &JsonSchema, hint: &str) -> Result<TypeRef> {
        let types = schema
            .schema_type
            .as_ref()
            .map(|t| t.non_null())
            .unwrap_or_default();

        let ty = match types.as_slice() {
            [] if schema.items.is_some() => self.resolve_items(schema, hint)?,
            [] if is_pure_map(schema) => self.resolve_map(schema, hint)?,
            [] => TypeRef::Any,
            [SchemaType::String] if schema.format.as_deref() == Some("date-time") => {
                TypeRef::DateTime
            }
            [SchemaType::String] => TypeRef::String,
            [SchemaType::Integer] => TypeRef::Integer,
            [SchemaType::Number] => TypeRef::Number,
            [SchemaType::Boolean] => TypeRef::Boolean,
            [SchemaType::Array] => self.resolve_items(schema, hint)?,
            [SchemaType::Object] => self.resolve_map(schema, hint)?,
            _ => TypeRef::Any,
        };
        Ok(ty)
    }

    fn resolve_items(&mut self, schema: &JsonSchema, hint: &str) -> Result<TypeRef> {
        let item = match &schema.items {
            Some(items) => self.resolve(items, &format!("{}Item", hint))?,
            None => TypeRef::Any,
        };
        Ok(TypeRef::array(item))
    }

    fn resolve_map(&mut self, schema: &JsonSchema, hint: &str) -> Result<TypeRef> {
        let value = match &schema.additional_properties {
            Some(AdditionalProperties::Schema(values)) => {
                self.resolve(values, &format!("{}Value", hint))?
            }
            _ => TypeRef::Any,
        };
        Ok(TypeRef::map(value))
    }
}

/// An object without declared properties whose values are described by
/// `additionalProperties`.
fn is_pure_map(schema: &JsonSchema) -> bool {
    schema.properties.is_empty()
        && matches!(
            schema.additional_properties,
            Some(AdditionalProperties::Schema(_))
        )
}

/// The number as an `i64` when it has no fractional part (`1` or `1.0`).
fn integral(n: &Number) -> Option<i64> {
    n.as_i64().or_else(|| {
        n.as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
            .map(|f| f as i64)
    })
}
