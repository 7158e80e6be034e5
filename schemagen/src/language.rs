//! Unified target dispatch.
//!
//! Centralizes target-specific generator creation and metadata.

use std::{fmt, path::PathBuf};

use schemagen_codegen::{
    language::LanguageCodegen,
    naming::{ConventionNaming, DefaultNaming, NamingHooks},
};
use schemagen_codegen_csharp::Generator as CSharpGenerator;
use schemagen_codegen_typescript::Generator as TypeScriptGenerator;

/// Supported output languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetLanguage {
    TypeScript,
    CSharp,
}

impl TargetLanguage {
    /// Returns the language identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetLanguage::TypeScript => "typescript",
            TargetLanguage::CSharp => "csharp",
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An output language together with the directory it writes to.
#[derive(Debug, Clone)]
pub struct Target {
    pub language: TargetLanguage,
    pub dir: PathBuf,
}

impl Target {
    pub fn new(language: TargetLanguage, dir: impl Into<PathBuf>) -> Self {
        Self {
            language,
            dir: dir.into(),
        }
    }
}

/// Language-specific support for code generation.
///
/// Provides the generator and naming strategy for a target language.
pub struct TargetSupport {
    generator: Box<dyn LanguageCodegen>,
    naming: Box<dyn NamingHooks>,
}

impl TargetSupport {
    /// Get support for the given language. `namespace` only applies to C#.
    pub fn get(language: TargetLanguage, namespace: &str) -> Self {
        match language {
            TargetLanguage::TypeScript => Self {
                generator: Box::new(TypeScriptGenerator::new()),
                naming: Box::new(DefaultNaming),
            },
            // C# is the convention-sensitive target.
            TargetLanguage::CSharp => Self {
                generator: Box::new(CSharpGenerator::new(namespace)),
                naming: Box::new(ConventionNaming::new()),
            },
        }
    }

    pub fn generator(&self) -> &dyn LanguageCodegen {
        self.generator.as_ref()
    }

    pub fn naming(&self) -> &dyn NamingHooks {
        self.naming.as_ref()
    }

    /// File extension without the dot (e.g., "ts").
    pub fn extension(&self) -> &'static str {
        self.generator.file_extension()
    }
}
