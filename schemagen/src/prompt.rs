//! Interactive continue/abort prompt.

use std::io::IsTerminal;

use dialoguer::{Confirm, theme::ColorfulTheme};

use crate::{ops, reports::FileReport};

/// Asks on the terminal whether to continue after a failed file.
///
/// Without an interactive stdin the answer is always "abort".
pub struct DialoguerConfirm;

impl ops::Confirm for DialoguerConfirm {
    fn confirm(&self, failure: &FileReport) -> bool {
        if !std::io::stdin().is_terminal() {
            tracing::warn!("stdin is not a terminal, aborting after failure");
            return false;
        }

        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!(
                "{} failed to generate. Continue with the remaining files?",
                failure.file_name()
            ))
            .default(false)
            .interact()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "prompt failed, aborting");
                false
            })
    }
}
