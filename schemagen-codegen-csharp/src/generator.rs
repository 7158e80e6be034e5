//! C# code generator producing Newtonsoft.Json-annotated classes.

use eyre::{Result, bail};
use schemagen_codegen::{
    language::{LanguageCodegen, TypeMapper},
    model::{
        AliasDecl, EnumDecl, EnumValue, ObjectDecl, PropertyDecl, TypeDecl, TypeModel, TypeRef,
    },
};

use crate::{
    CSharpFile, CSharpTypeMapper,
    ast::{CSharpAttr, Class, Enum, Member, Property, Required},
};

/// Namespace used when none is configured.
pub const DEFAULT_NAMESPACE: &str = "Root";

const HEADER: &str = "//----------------------
// <auto-generated>
//     Generated by schemagen - DO NOT EDIT
// </auto-generated>
//----------------------";

/// C# code generator that emits one namespace per schema.
#[derive(Debug, Clone)]
pub struct Generator {
    namespace: String,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}

impl Generator {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    fn class(&self, model: &TypeModel, mapper: &CSharpTypeMapper, decl: &ObjectDecl) -> Class {
        let class = decl.properties.iter().fold(
            Class::new(&decl.name).attr(CSharpAttr::generated_code()),
            |class, property| class.property(self.property(model, mapper, property)),
        );

        match &decl.description {
            Some(doc) => class.doc(doc),
            None => class,
        }
    }

    fn property(
        &self,
        model: &TypeModel,
        mapper: &CSharpTypeMapper,
        property: &PropertyDecl,
    ) -> Property {
        let ty = if property.required {
            mapper.map_type(&property.ty)
        } else {
            mapper.map_optional_type(&property.ty)
        };
        let required = match (property.required, property.ty.is_nullable()) {
            (true, false) => Required::Always,
            (true, true) => Required::AllowNull,
            (false, _) => Required::Default,
        };

        let mut out = Property::new(&property.name, ty)
            .attr(CSharpAttr::json_property(&property.json_name, required));
        if is_string_enum(model, &property.ty) {
            out = out.attr(CSharpAttr::StringEnumConverter);
        }
        if let Some(doc) = &property.description {
            out = out.doc(doc);
        }
        out
    }

    fn enumeration(&self, decl: &EnumDecl) -> Enum {
        let e = decl.members.iter().enumerate().fold(
            Enum::new(&decl.name).attr(CSharpAttr::generated_code()),
            |e, (index, member)| {
                let member = match &member.value {
                    EnumValue::String(value) => Member::new(&member.name, index as i64)
                        .attr(CSharpAttr::enum_member(value)),
                    EnumValue::Integer(value) => Member::new(&member.name, *value),
                };
                e.member(member)
            },
        );

        match &decl.description {
            Some(doc) => e.doc(doc),
            None => e,
        }
    }

    /// C# has no type aliases, so collection aliases become subclasses of
    /// the matching collection type.
    fn alias(
        &self,
        model: &TypeModel,
        mapper: &CSharpTypeMapper,
        decl: &AliasDecl,
    ) -> Result<Class> {
        let base = match base_type(&decl.target) {
            TypeRef::Array(inner) => format!(
                "System.Collections.ObjectModel.Collection<{}>",
                mapper.map_type(inner)
            ),
            TypeRef::Map(inner) => format!(
                "System.Collections.Generic.Dictionary<string, {}>",
                mapper.map_type(inner)
            ),
            TypeRef::Named(name) if matches!(model.get(name), Some(TypeDecl::Object(_))) => {
                name.clone()
            }
            other => bail!(
                "type '{}' is a {} and has no C# class equivalent",
                decl.name,
                mapper.map_type(other)
            ),
        };

        let class = Class::new(&decl.name)
            .attr(CSharpAttr::generated_code())
            .extends(base);
        Ok(match &decl.description {
            Some(doc) => class.doc(doc),
            None => class,
        })
    }
}

fn base_type(ty: &TypeRef) -> &TypeRef {
    match ty {
        TypeRef::Nullable(inner) => base_type(inner),
        other => other,
    }
}

fn is_string_enum(model: &TypeModel, ty: &TypeRef) -> bool {
    match base_type(ty) {
        TypeRef::Named(name) => {
            matches!(model.get(name), Some(TypeDecl::Enum(e)) if !e.is_integer())
        }
        _ => false,
    }
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "csharp"
    }

    fn file_extension(&self) -> &'static str {
        "cs"
    }

    fn render(&self, model: &TypeModel) -> Result<String> {
        let mapper = CSharpTypeMapper::for_model(model);
        let mut file = CSharpFile::new(&self.namespace);

        for decl in &model.types {
            file = match decl {
                TypeDecl::Object(decl) => file.add(self.class(model, &mapper, decl)),
                TypeDecl::Enum(decl) => file.add(self.enumeration(decl)),
                TypeDecl::Alias(decl) => file.add(self.alias(model, &mapper, decl)?),
            };
        }

        Ok(file.render_with_header(HEADER))
    }
}
