//! TypeScript type alias builder.

use schemagen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// Builder for TypeScript type aliases.
#[derive(Debug, Clone)]
pub struct TypeAlias {
    name: String,
    doc: Option<String>,
    ty: String,
    exported: bool,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            ty: ty.into(),
            exported: true,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    /// Render the type alias to a CodeBuilder.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        let export = if self.exported { "export " } else { "" };

        let mut builder = builder;
        if let Some(doc) = &self.doc {
            builder.push_jsdoc(doc);
        }

        builder.push_line(&format!("{}type {} = {};", export, self.name, self.ty));
        builder
    }

    /// Build the type alias as a string.
    pub fn build(&self) -> String {
        self.render(CodeBuilder::typescript()).build()
    }
}

impl Renderable for TypeAlias {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::JsDoc(doc.clone()));
        }

        fragments.push(CodeFragment::Line(format!(
            "{}type {} = {};",
            export, self.name, self.ty
        )));

        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_alias() {
        let alias = TypeAlias::new("Tags", "string[]").build();
        assert_eq!(alias, "export type Tags = string[];\n");
    }

    #[test]
    fn test_type_alias_with_doc() {
        let alias = TypeAlias::new("Id", "number").doc("Row id").private().build();
        assert_eq!(alias, "/** Row id */\ntype Id = number;\n");
    }
}
