//! CSharpFile abstraction for structured C# file generation.

use schemagen_codegen::builder::{CodeBuilder, CodeFragment, Indent, Renderable};

/// A C# compilation unit: a header comment and one namespace holding the
/// body declarations.
///
/// # Example
///
/// ```ignore
/// let file = CSharpFile::new("Root")
///     .add(Class::new("Widget"))
///     .render_with_header("// Generated by schemagen");
/// ```
pub struct CSharpFile {
    namespace: String,
    body: Vec<Vec<CodeFragment>>,
}

impl CSharpFile {
    /// Create a new empty file for `namespace`.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            body: Vec::new(),
        }
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Render the file with C# indentation (4 spaces).
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::CSHARP)
    }

    /// Render the file with a header comment.
    pub fn render_with_header(&self, header: &str) -> String {
        format!("{}\n\n{}", header, self.render())
    }

    /// Render the file with custom indentation.
    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut body = Vec::new();
        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                body.push(CodeFragment::Blank);
            }
            body.extend(fragments.iter().cloned());
        }

        let mut builder = CodeBuilder::new(indent);
        builder.push_line(&format!("namespace {}", self.namespace));
        builder.apply_fragment(CodeFragment::block("{", body, Some("}".to_string())));
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Class;

    #[test]
    fn test_empty_namespace() {
        assert_eq!(CSharpFile::new("Root").render(), "namespace Root\n{\n}\n");
    }

    #[test]
    fn test_declarations_are_indented_and_spaced() {
        let code = CSharpFile::new("Acme.Models")
            .add(Class::new("A"))
            .add(Class::new("B"))
            .render_with_header("// header");
        assert_eq!(
            code,
            "// header\n\nnamespace Acme.Models\n{\n    public partial class A\n    {\n    }\n\n    public partial class B\n    {\n    }\n}\n"
        );
    }
}
