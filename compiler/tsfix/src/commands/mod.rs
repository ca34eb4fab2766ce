//! Command handlers for the `tsfix` CLI.
//!
//! Handlers return the process exit status; `main` does the exiting.

mod generate;
mod split;

pub use generate::{format_table, generate};
pub use split::{describe_split, split_file};

/// Exit status for a successful command.
pub const EXIT_OK: i32 = 0;
/// Exit status for oracle, sink and corpus failures.
pub const EXIT_FAILURE: i32 = 1;
/// Exit status for invalid arguments.
pub const EXIT_USAGE: i32 = 2;
