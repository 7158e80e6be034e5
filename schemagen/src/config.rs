//! Validated configuration for a generation run.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::{
    language::{Target, TargetLanguage},
    ops::FailurePolicy,
};

/// Precondition failures, reported before any I/O happens.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("no output target given")]
    #[diagnostic(
        code(schemagen::config::no_target),
        help("pass --typescript <DIR> and/or --csharp <DIR>")
    )]
    NoTarget,

    #[error("no schema source given")]
    #[diagnostic(
        code(schemagen::config::no_source),
        help("pass --schema <DIR> or --remote <URL>")
    )]
    NoSource,
}

/// Where schema documents come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A local directory of schema files.
    Directory(PathBuf),
    /// A single remote document, fetched into a staging directory.
    Remote(String),
}

/// Configuration of one generation run.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub source: Source,
    pub targets: Vec<Target>,
    pub namespace: String,
    pub policy: FailurePolicy,
    pub dry_run: bool,
}

/// Unvalidated inputs, as they come from the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigInput {
    pub schema_dir: Option<PathBuf>,
    pub remote: Option<String>,
    pub typescript_dir: Option<PathBuf>,
    pub csharp_dir: Option<PathBuf>,
    pub namespace: Option<String>,
    pub policy: FailurePolicy,
    pub dry_run: bool,
}

impl GenerateConfig {
    /// Validate `input`. A remote URL takes precedence over a local
    /// directory.
    pub fn from_input(input: ConfigInput) -> Result<Self, ConfigError> {
        let mut targets = Vec::new();
        if let Some(dir) = input.typescript_dir {
            targets.push(Target::new(TargetLanguage::TypeScript, dir));
        }
        if let Some(dir) = input.csharp_dir {
            targets.push(Target::new(TargetLanguage::CSharp, dir));
        }
        if targets.is_empty() {
            return Err(ConfigError::NoTarget);
        }

        let source = match (input.remote, input.schema_dir) {
            (Some(url), dir) => {
                if let Some(dir) = dir {
                    tracing::warn!(
                        "--remote given, ignoring schema directory '{}'",
                        dir.display()
                    );
                }
                Source::Remote(url)
            }
            (None, Some(dir)) => Source::Directory(dir),
            (None, None) => return Err(ConfigError::NoSource),
        };

        Ok(Self {
            source,
            targets,
            namespace: input
                .namespace
                .unwrap_or_else(|| schemagen_codegen_csharp::DEFAULT_NAMESPACE.to_string()),
            policy: input.policy,
            dry_run: input.dry_run,
        })
    }
}
