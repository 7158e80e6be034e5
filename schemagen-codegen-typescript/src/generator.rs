//! TypeScript code generator.

use eyre::Result;
use schemagen_codegen::{
    language::{LanguageCodegen, TypeMapper},
    model::{AliasDecl, EnumDecl, EnumValue, ObjectDecl, TypeDecl, TypeModel},
};

use crate::{
    CodeFile, TypeScriptTypeMapper,
    ast::{Enum, Interface, InterfaceField, TypeAlias},
    naming::{property_key, string_literal},
};

const HEADER: &str = "// Generated by schemagen - DO NOT EDIT";

/// TypeScript code generator that emits interfaces, enums and type aliases.
#[derive(Debug, Clone, Copy, Default)]
pub struct Generator;

impl Generator {
    pub fn new() -> Self {
        Self
    }

    fn interface(&self, decl: &ObjectDecl) -> Interface {
        let mapper = TypeScriptTypeMapper;
        let interface = decl
            .properties
            .iter()
            .fold(Interface::new(&decl.name), |interface, property| {
                let mut field =
                    InterfaceField::new(property_key(&property.name), mapper.map_type(&property.ty));
                if !property.required {
                    field = field.optional();
                }
                if let Some(doc) = &property.description {
                    field = field.doc(doc);
                }
                interface.field_with(field)
            });

        match &decl.description {
            Some(doc) => interface.doc(doc),
            None => interface,
        }
    }

    fn enumeration(&self, decl: &EnumDecl) -> Enum {
        let e = decl.members.iter().fold(Enum::new(&decl.name), |e, member| {
            let value = match &member.value {
                EnumValue::String(s) => string_literal(s),
                EnumValue::Integer(n) => n.to_string(),
            };
            e.member(&member.name, value)
        });

        match &decl.description {
            Some(doc) => e.doc(doc),
            None => e,
        }
    }

    fn alias(&self, decl: &AliasDecl) -> TypeAlias {
        let alias = TypeAlias::new(&decl.name, TypeScriptTypeMapper.map_type(&decl.target));
        match &decl.description {
            Some(doc) => alias.doc(doc),
            None => alias,
        }
    }
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn file_extension(&self) -> &'static str {
        "ts"
    }

    fn render(&self, model: &TypeModel) -> Result<String> {
        let file = model
            .types
            .iter()
            .fold(CodeFile::new().header(HEADER), |file, decl| match decl {
                TypeDecl::Object(decl) => file.add(self.interface(decl)),
                TypeDecl::Enum(decl) => file.add(self.enumeration(decl)),
                TypeDecl::Alias(decl) => file.add(self.alias(decl)),
            });
        Ok(file.render())
    }
}
