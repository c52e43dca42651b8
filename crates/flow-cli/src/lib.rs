//! Library side of the `iqvia-flow` command-line tool.

pub mod commands;
pub mod logging;
pub mod types;

pub use commands::run_profile;
pub use types::{FileOutcome, FileStatus, RunConfig, RunResult};
