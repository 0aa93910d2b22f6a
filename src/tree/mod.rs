//! Content-addressed directory trees
//!
//! Represents a directory snapshot as a tree where each node (file,
//! directory or symbolic link) carries a deterministic hash of its content
//! and, for directories, of its entries.

pub mod builder;
pub mod content;
pub mod hasher;
pub mod node;

pub use builder::{build_file_tree, TreeBuilder};
pub use content::{ChunkedMerkleHasher, ContentHasher};
pub use node::{DirectoryNode, FileNode, FileType, FsNode, SymbolicNode, TreeStats};
