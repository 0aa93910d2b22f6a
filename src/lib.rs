//! Dirtree: Content-Addressed Directory Trees
//!
//! Builds a deterministic snapshot of a local directory in which every file,
//! directory and symbolic link is addressed by a 256-bit digest. Identical
//! trees always yield the identical root digest, so the root can be used to
//! verify transfers and to address directories the same way file content is
//! addressed.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod tree;
pub mod types;

pub use error::{AppError, TreeError};
pub use tree::{build_file_tree, FsNode, TreeBuilder};
pub use types::Digest;
