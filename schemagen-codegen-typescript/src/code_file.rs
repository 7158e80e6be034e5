//! CodeFile abstraction for structured TypeScript file generation.

use schemagen_codegen::builder::{CodeBuilder, CodeFragment, Indent, Renderable};

/// A structured representation of a TypeScript file: an optional header
/// comment followed by body elements separated by blank lines.
///
/// # Example
///
/// ```ignore
/// let file = CodeFile::new()
///     .header("// Generated by schemagen")
///     .add(Interface::new("Widget").field("id", "number"))
///     .render();
/// ```
#[derive(Default)]
pub struct CodeFile {
    header: Option<String>,
    body: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    /// Create a new empty CodeFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header comment, emitted verbatim at the top of the file.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Render the file with TypeScript indentation.
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::TYPESCRIPT)
    }

    /// Render the file with custom indentation.
    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);

        if let Some(header) = &self.header {
            for line in header.lines() {
                builder.push_line(line);
            }
            if !self.body.is_empty() {
                builder.push_blank();
            }
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }

    /// Check if the file is empty.
    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.body.is_empty()
    }
}
