//! C# enum builder.

use schemagen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::CSharpAttr;

/// A member of a C# enum.
#[derive(Debug, Clone)]
pub struct Member {
    pub name: String,
    pub value: i64,
    pub attrs: Vec<CSharpAttr>,
}

impl Member {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
            attrs: Vec::new(),
        }
    }

    /// Add an attribute to the member, e.g. `EnumMember(Value = @"x")`.
    pub fn attr(mut self, attr: CSharpAttr) -> Self {
        self.attrs.push(attr);
        self
    }
}

/// Builder for `public enum` declarations.
#[derive(Debug, Clone)]
pub struct Enum {
    name: String,
    doc: Option<String>,
    attrs: Vec<CSharpAttr>,
    members: Vec<Member>,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            attrs: Vec::new(),
            members: Vec::new(),
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

    pub fn member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    /// Build the enum as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::csharp();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Enum {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::xml_doc(doc));
        }
        for attr in &self.attrs {
            fragments.push(CodeFragment::Line(attr.to_string()));
        }
        fragments.push(CodeFragment::Line(format!("public enum {}", self.name)));

        let mut body = Vec::new();
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 && !member.attrs.is_empty() {
                body.push(CodeFragment::Blank);
            }
            for attr in &member.attrs {
                body.push(CodeFragment::Line(attr.to_string()));
            }
            body.push(CodeFragment::Line(format!(
                "{} = {},",
                member.name, member.value
            )));
        }
        fragments.push(CodeFragment::block("{", body, Some("}".to_string())));

        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_enum() {
        let e = Enum::new("Level")
            .member(Member::new("Low", 1))
            .member(Member::new("High", 3))
            .build();
        assert_eq!(e, "public enum Level\n{\n    Low = 1,\n    High = 3,\n}\n");
    }

    #[test]
    fn test_string_enum_members_are_spaced() {
        let e = Enum::new("Op")
            .member(Member::new("Eq", 0).attr(CSharpAttr::enum_member("=")))
            .member(Member::new("Ne", 1).attr(CSharpAttr::enum_member("!=")))
            .build();
        assert_eq!(
            e,
            "public enum Op\n\
             {\n    \
             [System.Runtime.Serialization.EnumMember(Value = @\"=\")]\n    \
             Eq = 0,\n\
             \n    \
             [System.Runtime.Serialization.EnumMember(Value = @\"!=\")]\n    \
             Ne = 1,\n\
             }\n"
        );
    }
}
