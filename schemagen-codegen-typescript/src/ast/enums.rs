//! TypeScript enum builder.

use schemagen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// Builder for TypeScript enums with explicit member values.
#[derive(Debug, Clone)]
pub struct Enum {
    name: String,
    doc: Option<String>,
    members: Vec<(String, String)>,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            members: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Add a member. `value` is emitted as-is, so string values must already
    /// be quoted.
    pub fn member(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.members.push((name.into(), value.into()));
        self
    }

    /// Build the enum as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Enum {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::jsdoc(doc));
        }

        let body = self
            .members
            .iter()
            .map(|(name, value)| CodeFragment::Line(format!("{} = {},", name, value)))
            .collect();
        fragments.push(CodeFragment::block(
            format!("export enum {} {{", self.name),
            body,
            Some("}".to_string()),
        ));
        fragments
    }
}
