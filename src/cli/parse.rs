//! CLI parse: clap types for dirtree. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Dirtree CLI - Content-addressed directory trees
#[derive(Parser, Debug)]
#[command(name = "dirtree")]
#[command(about = "Build deterministic content-addressed trees of local directories")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Build the tree for a directory and print it
    Build {
        /// Directory to snapshot
        path: PathBuf,
        /// Output format (text or json); defaults to the configured format
        #[arg(long)]
        format: Option<String>,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Print the root hash of a directory
    Hash {
        /// Directory to snapshot
        path: PathBuf,
    },
    /// Build the tree and print one entry by relative path
    Lookup {
        /// Directory to snapshot
        path: PathBuf,
        /// Entry path relative to the directory, `/`-separated
        entry: String,
        /// Output format (text or json); defaults to the configured format
        #[arg(long)]
        format: Option<String>,
    },
}
