//! Error types for directory tree construction and the surrounding tooling.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a tree from the filesystem.
///
/// Every variant carries the path that caused it. Any of these aborts the
/// whole build.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("Failed to stat file {path:?}: {source}")]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File tree building is only supported for directory: {0:?}")]
    NotADirectory(PathBuf),

    #[error("Failed to read directory {path:?}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid symbolic link {path:?}: {source}")]
    ReadLink {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported file type: {0:?}")]
    UnsupportedFileType(PathBuf),

    #[error("Failed to calculate content hash for {path:?}: {source}")]
    ContentHash {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Name is not valid UTF-8: {0:?}")]
    InvalidName(PathBuf),
}

/// Errors surfaced by configuration, logging and the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Tree error: {0}")]
    Tree(#[from] TreeError),

    #[error("Entry not found in tree: {0}")]
    EntryNotFound(String),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
