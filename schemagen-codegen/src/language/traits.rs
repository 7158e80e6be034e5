//! Language-agnostic code generation traits.

use eyre::Result;
use schemagen_schema::JsonSchema;

use crate::{
    model::{TypeModel, TypeRef},
    naming::NamingHooks,
};

/// Trait for language-specific code generators.
///
/// Implement this trait to add support for emitting types in a new language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "typescript", "csharp")
    fn language(&self) -> &'static str;

    /// File extension for generated source files, without the dot (e.g., "ts", "cs")
    fn file_extension(&self) -> &'static str;

    /// Render a lowered model as one source file.
    fn render(&self, model: &TypeModel) -> Result<String>;

    /// Emit source for `schema`, naming the root type `root_name` unless the
    /// schema has a title.
    fn emit(
        &self,
        schema: &JsonSchema,
        root_name: &str,
        naming: &dyn NamingHooks,
    ) -> Result<GeneratedSource> {
        let model = TypeModel::lower(schema, root_name, naming)?;
        let content = self.render(&model)?;
        Ok(GeneratedSource {
            content,
            warnings: model.warnings,
        })
    }
}

/// Source text produced for one schema.
#[derive(Debug, Clone, Default)]
pub struct GeneratedSource {
    /// File content
    pub content: String,
    /// Non-fatal problems found while generating
    pub warnings: Vec<String>,
}

/// Trait for mapping model types to language-specific type strings.
///
/// Implement this trait for each target language to provide type mappings.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Map a type reference to a language-specific type string
    fn map_type(&self, ty: &TypeRef) -> String;

    /// Map the type of an optional property.
    ///
    /// Default implementation maps the type unchanged; languages where
    /// optionality shows up in the type override this.
    fn map_optional_type(&self, ty: &TypeRef) -> String {
        self.map_type(ty)
    }
}
