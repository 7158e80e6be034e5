//! What happens after a file fails to generate.

use std::{fmt, str::FromStr};

use crate::reports::FileReport;

/// Asks the operator whether to keep going after a failed file.
pub trait Confirm {
    /// Returns `true` to continue with the remaining files.
    fn confirm(&self, failure: &FileReport) -> bool;
}

/// How the run reacts to a file with failures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Ask the operator.
    #[default]
    Prompt,
    /// Skip the file and carry on.
    Continue,
    /// Stop the run.
    Abort,
}

/// Outcome of [`FailurePolicy::decide`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Continue,
    Abort,
}

impl FailurePolicy {
    /// Decide whether to continue after `failure`. Only [`FailurePolicy::Prompt`]
    /// consults `confirm`.
    pub fn decide(self, failure: &FileReport, confirm: &dyn Confirm) -> Decision {
        let proceed = match self {
            FailurePolicy::Continue => true,
            FailurePolicy::Abort => false,
            FailurePolicy::Prompt => confirm.confirm(failure),
        };

        if proceed {
            Decision::Continue
        } else {
            Decision::Abort
        }
    }

    /// Returns the policy identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            FailurePolicy::Prompt => "prompt",
            FailurePolicy::Continue => "continue",
            FailurePolicy::Abort => "abort",
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "prompt" | "ask" => Ok(FailurePolicy::Prompt),
            "continue" | "skip" => Ok(FailurePolicy::Continue),
            "abort" | "stop" => Ok(FailurePolicy::Abort),
            _ => Err(format!(
                "unknown failure policy '{}', expected 'prompt', 'continue' or 'abort'",
                s
            )),
        }
    }
}
