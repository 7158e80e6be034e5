//! Report data structures for commands.
//!
//! This module separates data collection from rendering.
//! Operations build reports, then commands render them to an Output target.

mod generate;
mod output;

pub use generate::{FileReport, GenerateReport, TargetReport, TargetResult};
pub use output::{Report, TerminalOutput};
