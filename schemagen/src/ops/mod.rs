//! Operations: the logic behind commands, returning reports.

mod generate;
mod policy;

pub use generate::generate;
pub use policy::{Confirm, Decision, FailurePolicy};
