use std::path::PathBuf;

use clap::{ArgAction, Parser};
use eyre::Result;

use crate::{
    config::{ConfigError, ConfigInput, GenerateConfig},
    fetch::HttpFetcher,
    ops::{self, FailurePolicy},
    prompt::DialoguerConfirm,
    reports::{Report, TerminalOutput},
};

/// Extension trait for exiting on configuration errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for std::result::Result<T, ConfigError> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "schemagen")]
#[command(version)]
#[command(about = "Generate TypeScript and C# types from JSON Schema documents")]
pub(crate) struct Cli {
    /// Directory containing the JSON schema files
    #[arg(short, long, value_name = "DIR")]
    schema: Option<PathBuf>,

    /// URL of a single schema document (used instead of --schema)
    #[arg(short, long, value_name = "URL")]
    remote: Option<String>,

    /// Output directory for TypeScript files
    #[arg(short, long, value_name = "DIR")]
    typescript: Option<PathBuf>,

    /// Output directory for C# files
    #[arg(short, long, value_name = "DIR")]
    csharp: Option<PathBuf>,

    /// Namespace for generated C# code
    #[arg(short, long, default_value = schemagen_codegen_csharp::DEFAULT_NAMESPACE)]
    namespace: String,

    /// What to do when a file fails: prompt, continue or abort
    #[arg(long, value_name = "POLICY", default_value_t = FailurePolicy::Prompt)]
    on_error: FailurePolicy,

    /// Print the generated code instead of writing files
    #[arg(long)]
    dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Default log level for the given verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    pub fn run(&self) -> Result<()> {
        let config = GenerateConfig::from_input(ConfigInput {
            schema_dir: self.schema.clone(),
            remote: self.remote.clone(),
            typescript_dir: self.typescript.clone(),
            csharp_dir: self.csharp.clone(),
            namespace: Some(self.namespace.clone()),
            policy: self.on_error,
            dry_run: self.dry_run,
        })
        .unwrap_or_exit();

        let report = ops::generate(&config, &HttpFetcher, &DialoguerConfirm)?;
        report.render(&mut TerminalOutput::new());

        if report.aborted {
            std::process::exit(1);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from([
            "schemagen",
            "-s",
            "schemas",
            "-t",
            "out/ts",
            "-c",
            "out/cs",
            "--on-error",
            "continue",
            "--dry-run",
            "-vv",
        ]);
        assert_eq!(cli.schema, Some(PathBuf::from("schemas")));
        assert_eq!(cli.typescript, Some(PathBuf::from("out/ts")));
        assert_eq!(cli.csharp, Some(PathBuf::from("out/cs")));
        assert_eq!(cli.namespace, "Root");
        assert_eq!(cli.on_error, FailurePolicy::Continue);
        assert!(cli.dry_run);
        assert_eq!(cli.log_level(), "debug");
    }

    #[test]
    fn test_rejects_unknown_policy() {
        assert!(Cli::try_parse_from(["schemagen", "--on-error", "retry"]).is_err());
    }

    #[test]
    fn test_default_policy_is_prompt() {
        let cli = Cli::parse_from(["schemagen", "-r", "https://example.com/a.json"]);
        assert_eq!(cli.on_error, FailurePolicy::Prompt);
        assert_eq!(cli.log_level(), "warn");
    }
}
