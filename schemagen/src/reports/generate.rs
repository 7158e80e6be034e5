//! Generate command report data structures.

use std::path::{Path, PathBuf};

use super::output::{Output, Report};
use crate::language::TargetLanguage;

/// Report data from a generation run.
#[derive(Debug, Default)]
pub struct GenerateReport {
    /// Directory the schema files were discovered in.
    pub source_dir: PathBuf,
    /// Number of schema files discovered.
    pub discovered: usize,
    /// One entry per processed file, in processing order.
    pub files: Vec<FileReport>,
    /// Whether the run stopped before processing every file.
    pub aborted: bool,
    /// Whether output was previewed instead of written.
    pub dry_run: bool,
}

/// Outcome of one schema file.
#[derive(Debug)]
pub struct FileReport {
    /// The schema file.
    pub path: PathBuf,
    /// Set when the file could not be parsed; no target ran.
    pub parse_error: Option<String>,
    /// One entry per target.
    pub targets: Vec<TargetReport>,
    /// Non-fatal problems found while emitting.
    pub warnings: Vec<String>,
}

/// Outcome of one target for one file.
#[derive(Debug)]
pub struct TargetReport {
    pub language: TargetLanguage,
    /// Where the output goes (or would go).
    pub output: PathBuf,
    pub result: TargetResult,
}

/// What happened to a target's output.
#[derive(Debug)]
pub enum TargetResult {
    /// Written to disk.
    Written { bytes: usize },
    /// Dry run: the content that would have been written.
    Preview { content: String },
    /// Emission or writing failed.
    Failed { message: String },
}

impl FileReport {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            parse_error: None,
            targets: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// A file that failed to parse.
    pub fn parse_failure(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            parse_error: Some(message.into()),
            ..Self::new(path)
        }
    }

    /// Whether parsing or any target failed.
    pub fn is_failure(&self) -> bool {
        self.failures().next().is_some()
    }

    /// Failure messages, paired with the target that failed (`None` for a
    /// parse failure).
    pub fn failures(&self) -> impl Iterator<Item = (Option<TargetLanguage>, &str)> {
        let parse = self.parse_error.as_deref().map(|message| (None, message));
        let targets = self.targets.iter().filter_map(|target| match &target.result {
            TargetResult::Failed { message } => Some((Some(target.language), message.as_str())),
            _ => None,
        });
        parse.into_iter().chain(targets)
    }

    pub fn file_name(&self) -> String {
        display_name(&self.path)
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

impl GenerateReport {
    /// Number of outputs written (or previewed).
    pub fn generated_count(&self) -> usize {
        self.files
            .iter()
            .flat_map(|file| &file.targets)
            .filter(|target| !matches!(target.result, TargetResult::Failed { .. }))
            .count()
    }

    /// Number of files with at least one failure.
    pub fn failed_count(&self) -> usize {
        self.files.iter().filter(|file| file.is_failure()).count()
    }

    /// Number of discovered files that were never processed.
    pub fn skipped_count(&self) -> usize {
        self.discovered.saturating_sub(self.files.len())
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        if self.dry_run {
            self.render_preview(out);
        } else {
            self.render_written(out);
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output) {
        out.key_value(
            "Found",
            &format!(
                "{} JSON schema files in {}",
                self.discovered,
                self.source_dir.display()
            ),
        );

        for file in &self.files {
            for warning in &file.warnings {
                out.warning(&format!("{}: {}", file.file_name(), warning));
            }
            for target in &file.targets {
                if let TargetResult::Written { bytes } = target.result {
                    out.added_item(&format!("{} ({} bytes)", target.output.display(), bytes));
                }
            }
            self.render_failures(out, file);
        }

        out.newline();
        out.key_value("Generated", &self.generated_count().to_string());
        out.key_value("Failed", &self.failed_count().to_string());
        self.render_aborted(out);
    }

    fn render_preview(&self, out: &mut dyn Output) {
        for file in &self.files {
            for target in &file.targets {
                if let TargetResult::Preview { content } = &target.result {
                    out.divider(&target.output.display().to_string());
                    out.preformatted(content);
                }
            }
            self.render_failures(out, file);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} files would be generated",
            self.generated_count()
        ));
        self.render_aborted(out);
    }

    fn render_failures(&self, out: &mut dyn Output, file: &FileReport) {
        for (target, message) in file.failures() {
            match target {
                Some(language) => {
                    out.error(&format!("{} ({}): {}", file.file_name(), language, message))
                }
                None => out.error(&format!("{}: {}", file.file_name(), message)),
            }
        }
    }

    fn render_aborted(&self, out: &mut dyn Output) {
        if self.aborted {
            out.warning(&format!(
                "run aborted, {} remaining files were not processed",
                self.skipped_count()
            ));
        }
    }
}
