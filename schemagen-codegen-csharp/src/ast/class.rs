//! C# class builder.

use schemagen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::CSharpAttr;

/// An auto-property of a C# class.
#[derive(Debug, Clone)]
pub struct Property {
    pub name: String,
    pub ty: String,
    pub doc: Option<String>,
    pub attrs: Vec<CSharpAttr>,
}

impl Property {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            doc: None,
            attrs: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn attr(mut self, attr: CSharpAttr) -> Self {
        self.attrs.push(attr);
        self
    }

    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::xml_doc(doc));
        }
        for attr in &self.attrs {
            fragments.push(CodeFragment::Line(attr.to_string()));
        }
        fragments.push(CodeFragment::Line(format!(
            "public {} {} {{ get; set; }}",
            self.ty, self.name
        )));
        fragments
    }
}

/// Builder for `public partial class` declarations.
#[derive(Debug, Clone)]
pub struct Class {
    name: String,
    doc: Option<String>,
    attrs: Vec<CSharpAttr>,
    base: Option<String>,
    properties: Vec<Property>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            attrs: Vec::new(),
            base: None,
            properties: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn attr(mut self, attr: CSharpAttr) -> Self {
        self.attrs.push(attr);
        self
    }

    /// Set the base class.
    pub fn extends(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    pub fn property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// Build the class as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::csharp();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Class {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::xml_doc(doc));
        }
        for attr in &self.attrs {
            fragments.push(CodeFragment::Line(attr.to_string()));
        }

        let header = match &self.base {
            Some(base) => format!("public partial class {} : {}", self.name, base),
            None => format!("public partial class {}", self.name),
        };
        fragments.push(CodeFragment::Line(header));

        let mut body = Vec::new();
        for (i, property) in self.properties.iter().enumerate() {
            if i > 0 {
                body.push(CodeFragment::Blank);
            }
            body.extend(property.to_fragments());
        }
        fragments.push(CodeFragment::block("{", body, Some("}".to_string())));

        fragments
    }
}
