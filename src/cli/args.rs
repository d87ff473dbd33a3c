//! CLI argument definitions using clap
//!
//! Commands:
//! - lexicache init --config <path>
//! - lexicache get --config <path> <word>
//! - lexicache stats --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// lexicache - a write-through vocabulary lookup cache
#[derive(Parser, Debug)]
#[command(name = "lexicache")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the store file with the default header row
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./lexicache.json")]
        config: PathBuf,
    },

    /// Look a word up against the store-backed cache
    Get {
        /// Path to configuration file
        #[arg(long, default_value = "./lexicache.json")]
        config: PathBuf,

        /// The word or phrase to look up
        word: String,
    },

    /// Print store and cache statistics as JSON
    Stats {
        /// Path to configuration file
        #[arg(long, default_value = "./lexicache.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
