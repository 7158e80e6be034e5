//! Batch generation over a directory of schema files.

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use schemagen_core::{File, output_file_name, output_stem};
use schemagen_schema::JsonSchema;

use super::{Confirm, Decision};
use crate::{
    config::{GenerateConfig, Source},
    fetch::{self, Fetcher},
    language::{Target, TargetSupport},
    reports::{FileReport, GenerateReport, TargetReport, TargetResult},
};

/// List the schema files directly inside `dir`: regular files with a
/// `.json` extension (any case), sorted by file name.
pub fn discover(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .wrap_err_with(|| format!("failed to read schema directory '{}'", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .wrap_err_with(|| format!("failed to list '{}'", dir.display()))?
            .path();
        if path.is_file() && is_json(&path) {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    tracing::debug!(dir = %dir.display(), count = files.len(), "discovered schema files");
    Ok(files)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Run one generation over every schema file of the configured source.
///
/// Per-file failures are recorded in the report and handed to the failure
/// policy; only problems with the source or the target directories are
/// returned as errors.
pub fn generate(
    config: &GenerateConfig,
    fetcher: &dyn Fetcher,
    confirm: &dyn Confirm,
) -> Result<GenerateReport> {
    // Keep the staging directory alive until the run is over.
    let staged;
    let source_dir = match &config.source {
        Source::Directory(dir) => dir.clone(),
        Source::Remote(url) => {
            tracing::info!(%url, "fetching remote schema");
            staged = fetch::stage(url, fetcher)?;
            tracing::info!(file = %staged.file().display(), "fetched remote schema");
            staged.dir().to_path_buf()
        }
    };

    let files = discover(&source_dir)?;

    if !config.dry_run {
        for target in &config.targets {
            std::fs::create_dir_all(&target.dir).wrap_err_with(|| {
                format!("failed to create output directory '{}'", target.dir.display())
            })?;
        }
    }

    let supports: Vec<(&Target, TargetSupport)> = config
        .targets
        .iter()
        .map(|target| (target, TargetSupport::get(target.language, &config.namespace)))
        .collect();

    let mut report = GenerateReport {
        source_dir,
        discovered: files.len(),
        dry_run: config.dry_run,
        ..Default::default()
    };

    for path in files {
        let file = process_file(&path, &supports, config.dry_run);
        let decision = if file.is_failure() {
            log_failures(&file);
            config.policy.decide(&file, confirm)
        } else {
            Decision::Continue
        };
        report.files.push(file);

        if decision == Decision::Abort {
            tracing::warn!(policy = %config.policy, "aborting run");
            report.aborted = true;
            break;
        }
    }

    Ok(report)
}

fn log_failures(file: &FileReport) {
    for (language, message) in file.failures() {
        match language {
            Some(language) => {
                tracing::warn!(file = %file.path.display(), %language, "{}", message)
            }
            None => tracing::warn!(file = %file.path.display(), "{}", message),
        }
    }
}

fn process_file(path: &Path, supports: &[(&Target, TargetSupport)], dry_run: bool) -> FileReport {
    let schema = match JsonSchema::from_file(path) {
        Ok(schema) => schema,
        Err(e) => return FileReport::parse_failure(path, e.summary()),
    };

    let root_name = output_stem(path);
    let mut report = FileReport::new(path);

    for (target, support) in supports {
        let output = target
            .dir
            .join(output_file_name(path, support.extension()));

        let result = match support
            .generator()
            .emit(&schema, &root_name, support.naming())
        {
            Ok(generated) => {
                for warning in &generated.warnings {
                    tracing::warn!(file = %path.display(), language = %target.language, "{}", warning);
                    report.warnings.push(warning.clone());
                }
                if dry_run {
                    TargetResult::Preview {
                        content: generated.content,
                    }
                } else {
                    match File::new(&output, generated.content).write() {
                        Ok(bytes) => {
                            tracing::info!(output = %output.display(), bytes, "generated");
                            TargetResult::Written { bytes }
                        }
                        Err(e) => TargetResult::Failed {
                            message: format!("{:#}", e),
                        },
                    }
                }
            }
            Err(e) => TargetResult::Failed {
                message: format!("{:#}", e),
            },
        };

        report.targets.push(TargetReport {
            language: target.language,
            output,
            result,
        });
    }

    report
}
