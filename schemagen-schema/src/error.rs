use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the document content and filename so error factories
/// don't need both passed around.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a serde_json error.
    pub fn parse_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = offset_of(&self.src, source.line(), source.column()).map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            filename: self.filename.clone(),
            source,
        })
    }

    /// Create an unresolved reference error.
    pub fn unresolved_reference(&self, reference: impl Into<String>) -> Box<Error> {
        let reference = reference.into();
        Box::new(Error::UnresolvedReference {
            src: self.named_source(),
            span: self.find_reference_span(&reference),
            reference,
        })
    }

    /// Create an unsupported reference error.
    pub fn unsupported_reference(&self, reference: impl Into<String>) -> Box<Error> {
        let reference = reference.into();
        Box::new(Error::UnsupportedReference {
            src: self.named_source(),
            span: self.find_reference_span(&reference),
            reference,
        })
    }

    fn find_reference_span(&self, reference: &str) -> Option<SourceSpan> {
        let quoted = format!("\"{}\"", reference);
        self.src
            .find(&quoted)
            .map(|offset| SourceSpan::from((offset, quoted.len())))
    }
}

/// Convert a 1-based line/column pair into a byte offset within `src`.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    Some((line_start + column.saturating_sub(1)).min(src.len()))
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(schemagen::io_error))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse schema '{filename}'")]
    #[diagnostic(code(schemagen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        filename: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unresolved reference '{reference}'")]
    #[diagnostic(
        code(schemagen::unresolved_reference),
        help("declare the target under 'definitions' or '$defs' of the root schema")
    )]
    UnresolvedReference {
        #[source_code]
        src: NamedSource<String>,
        #[label("referenced here")]
        span: Option<SourceSpan>,
        reference: String,
    },

    #[error("unsupported reference '{reference}'")]
    #[diagnostic(
        code(schemagen::unsupported_reference),
        help("only local references are supported: '#', '#/definitions/<name>' or '#/$defs/<name>'")
    )]
    UnsupportedReference {
        #[source_code]
        src: NamedSource<String>,
        #[label("referenced here")]
        span: Option<SourceSpan>,
        reference: String,
    },
}

impl Error {
    /// One-line description: the message, its causes and any help text.
    pub fn summary(&self) -> String {
        let mut summary = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            summary.push_str(": ");
            summary.push_str(&cause.to_string());
            source = std::error::Error::source(cause);
        }
        if let Some(help) = self.help() {
            summary.push_str(&format!(" (help: {})", help));
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_includes_cause() {
        let ctx = SourceContext::new("{ oops }", "bad.json");
        let cause = serde_json::from_str::<serde_json::Value>("{ oops }").unwrap_err();
        let summary = ctx.parse_error(cause).summary();
        assert!(summary.starts_with("failed to parse schema 'bad.json': "));
        assert!(summary.contains("at line 1 column"), "{summary}");
    }

    #[test]
    fn test_summary_includes_help() {
        let ctx = SourceContext::new(r##"{"$ref": "#/definitions/Missing"}"##, "a.json");
        let summary = ctx.unresolved_reference("#/definitions/Missing").summary();
        assert_eq!(
            summary,
            "unresolved reference '#/definitions/Missing' (help: declare the target under \
             'definitions' or '$defs' of the root schema)"
        );
    }

    #[test]
    fn test_offset_of() {
        let src = "{\n  \"a\": 1,\n  x\n}";
        assert_eq!(offset_of(src, 1, 1), Some(0));
        assert_eq!(offset_of(src, 3, 3), Some(14));
        assert_eq!(offset_of(src, 0, 0), None);
        assert_eq!(offset_of(src, 40, 1), Some(src.len()));
    }

    #[test]
    fn test_reference_span() {
        let ctx = SourceContext::new(r##"{"$ref": "#/definitions/Missing"}"##, "a.json");
        let err = ctx.unresolved_reference("#/definitions/Missing");
        match *err {
            Error::UnresolvedReference { span, .. } => {
                let span = span.expect("span should be found");
                assert_eq!(span.offset(), 9);
                assert_eq!(span.len(), 23);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
