//! Filesystem node types
//!
//! A tree is a nest of [`FsNode`] values. Directories own their entries,
//! kept sorted by name so that lookups can binary search and the directory
//! hash is a function of a total order.

use crate::tree::hasher;
use crate::types::Digest;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name given to the root node of a built tree
pub const ROOT_NAME: &str = ".";

/// Kind of a filesystem node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    File,
    Directory,
    Symbolic,
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FileType::File => "file",
            FileType::Directory => "directory",
            FileType::Symbolic => "symbolic",
        };
        f.write_str(s)
    }
}

/// Regular file: hash of its content plus its length in bytes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNode {
    name: String,
    #[serde(default, skip_serializing_if = "Digest::is_zero")]
    hash: Digest,
    #[serde(default)]
    size: u64,
}

impl FileNode {
    pub fn size(&self) -> u64 {
        self.size
    }
}

/// Directory: entries sorted ascending by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryNode {
    name: String,
    #[serde(default, skip_serializing_if = "Digest::is_zero")]
    hash: Digest,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    entries: Vec<FsNode>,
}

impl DirectoryNode {
    pub fn entries(&self) -> &[FsNode] {
        &self.entries
    }
}

/// Symbolic link: hash of the raw target text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolicNode {
    name: String,
    #[serde(default, skip_serializing_if = "Digest::is_zero")]
    hash: Digest,
    link: String,
}

impl SymbolicNode {
    /// Link target as read from the filesystem, unresolved
    pub fn link(&self) -> &str {
        &self.link
    }
}

/// A node in a content-addressed directory tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FsNode {
    File(FileNode),
    Directory(DirectoryNode),
    Symbolic(SymbolicNode),
}

impl FsNode {
    /// Create a file node. The hash and size are taken as given.
    pub fn file(name: impl Into<String>, hash: Digest, size: u64) -> Self {
        FsNode::File(FileNode {
            name: name.into(),
            hash,
            size,
        })
    }

    /// Create a symbolic link node hashed from its target text.
    pub fn symbolic(name: impl Into<String>, link: impl Into<String>) -> Self {
        let link = link.into();
        FsNode::Symbolic(SymbolicNode {
            name: name.into(),
            hash: hasher::compute_symbolic_hash(&link),
            link,
        })
    }

    /// Create a directory node.
    ///
    /// Entries are sorted by name (stable, so duplicate names keep their
    /// relative order) before the directory hash is computed. The order the
    /// caller passed in is not preserved.
    pub fn directory(name: impl Into<String>, mut entries: Vec<FsNode>) -> Self {
        entries.sort_by(|a, b| a.name().cmp(b.name()));

        let child_hashes: Vec<Digest> = entries.iter().map(FsNode::hash).collect();
        let hash = hasher::compute_directory_hash(&child_hashes);

        FsNode::Directory(DirectoryNode {
            name: name.into(),
            hash,
            entries,
        })
    }

    pub fn name(&self) -> &str {
        match self {
            FsNode::File(f) => &f.name,
            FsNode::Directory(d) => &d.name,
            FsNode::Symbolic(s) => &s.name,
        }
    }

    pub fn hash(&self) -> Digest {
        match self {
            FsNode::File(f) => f.hash,
            FsNode::Directory(d) => d.hash,
            FsNode::Symbolic(s) => s.hash,
        }
    }

    pub fn file_type(&self) -> FileType {
        match self {
            FsNode::File(_) => FileType::File,
            FsNode::Directory(_) => FileType::Directory,
            FsNode::Symbolic(_) => FileType::Symbolic,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, FsNode::File(_))
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, FsNode::Directory(_))
    }

    pub fn is_symbolic(&self) -> bool {
        matches!(self, FsNode::Symbolic(_))
    }

    /// Directory entries; empty for files and links
    pub fn entries(&self) -> &[FsNode] {
        match self {
            FsNode::Directory(d) => &d.entries,
            _ => &[],
        }
    }

    /// Size in bytes, files only
    pub fn size(&self) -> Option<u64> {
        match self {
            FsNode::File(f) => Some(f.size),
            _ => None,
        }
    }

    /// Link target, symbolic links only
    pub fn link(&self) -> Option<&str> {
        match self {
            FsNode::Symbolic(s) => Some(&s.link),
            _ => None,
        }
    }

    /// Renaming does not touch the hash: names never feed into a node's own
    /// hash, only into the ordering of its parent's entries.
    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        match self {
            FsNode::File(f) => f.name = name,
            FsNode::Directory(d) => d.name = name,
            FsNode::Symbolic(s) => s.name = name,
        }
    }

    /// Find an immediate entry by name.
    ///
    /// Binary search over the sorted entries, O(log n). Always `None` for
    /// files and symbolic links.
    pub fn search(&self, name: &str) -> Option<&FsNode> {
        let entries = self.entries();
        entries
            .binary_search_by(|entry| entry.name().cmp(name))
            .ok()
            .map(|i| &entries[i])
    }

    /// Find a descendant by `/`-separated relative path.
    ///
    /// Empty and `.` components are skipped, so `""` and `"."` return `self`.
    /// `..` is not supported and yields `None`.
    pub fn locate(&self, relative_path: &str) -> Option<&FsNode> {
        let mut current = self;
        for component in relative_path.split('/') {
            match component {
                "" | "." => continue,
                ".." => return None,
                name => current = current.search(name)?,
            }
        }
        Some(current)
    }

    /// Counts over this node and everything beneath it
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        stats.record(self);
        stats
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }

    /// Parse a serialized tree.
    ///
    /// Directories are rebuilt through [`FsNode::directory`] and links
    /// through [`FsNode::symbolic`], so entries come back sorted and their
    /// hashes agree with the children. File hashes and sizes are taken as
    /// given.
    pub fn from_json(json: &str) -> serde_json::Result<FsNode> {
        let node: FsNode = serde_json::from_str(json)?;
        Ok(node.rehash())
    }

    fn rehash(self) -> FsNode {
        match self {
            FsNode::File(_) => self,
            FsNode::Symbolic(s) => FsNode::symbolic(s.name, s.link),
            FsNode::Directory(d) => FsNode::directory(
                d.name,
                d.entries.into_iter().map(FsNode::rehash).collect(),
            ),
        }
    }
}

/// Summary counts for a tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    pub files: u64,
    pub directories: u64,
    pub symlinks: u64,
    /// Sum of file sizes in bytes
    pub total_size: u64,
}

impl TreeStats {
    /// Total number of nodes counted
    pub fn node_count(&self) -> u64 {
        self.files + self.directories + self.symlinks
    }

    fn record(&mut self, node: &FsNode) {
        match node {
            FsNode::File(f) => {
                self.files += 1;
                self.total_size += f.size;
            }
            FsNode::Symbolic(_) => self.symlinks += 1,
            FsNode::Directory(d) => {
                self.directories += 1;
                for entry in &d.entries {
                    self.record(entry);
                }
            }
        }
    }
}
