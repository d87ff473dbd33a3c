//! CLI module for lexicache
//!
//! Provides command-line access to the store-backed cache:
//! - init: create the store file with the default header
//! - get: bootstrap and look one word up
//! - stats: print store and cache statistics

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{get, init, run, run_command, stats};
pub use errors::{CliError, CliErrorCode, CliResult};
