//! Tree builder for constructing content-addressed directory trees

use crate::error::TreeError;
use crate::tree::content::{ChunkedMerkleHasher, ContentHasher};
use crate::tree::node::{FsNode, ROOT_NAME};
use crate::types::Digest;
use std::fs::{self, Metadata};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error, info, instrument, trace};

/// Build the tree for `path` with the default content hasher.
///
/// The root node is always named `"."`.
pub fn build_file_tree(path: impl Into<PathBuf>) -> Result<FsNode, TreeError> {
    TreeBuilder::new(path).build()
}

/// Tree builder for directory snapshots
///
/// Walks the filesystem depth-first and builds nodes bottom-up: every
/// directory is hashed from its already-built entries.
pub struct TreeBuilder<H = ChunkedMerkleHasher> {
    root: PathBuf,
    hasher: H,
}

impl TreeBuilder<ChunkedMerkleHasher> {
    /// Create a new tree builder for the given root path
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_hasher(root, ChunkedMerkleHasher::new())
    }
}

impl<H: ContentHasher> TreeBuilder<H> {
    /// Create a tree builder that hashes file content with `hasher`
    pub fn with_hasher(root: impl Into<PathBuf>, hasher: H) -> Self {
        Self {
            root: root.into(),
            hasher,
        }
    }

    /// Build the complete tree from the filesystem
    ///
    /// The root must be a directory; a symlink to a directory is accepted
    /// here and nowhere else. Any failure below the root aborts the build.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn build(&self) -> Result<FsNode, TreeError> {
        let start = Instant::now();
        info!("Starting tree build");

        let metadata = fs::metadata(&self.root).map_err(|source| {
            error!("Failed to stat root: {}", source);
            TreeError::Stat {
                path: self.root.clone(),
                source,
            }
        })?;

        if !metadata.is_dir() {
            error!("Root is not a directory");
            return Err(TreeError::NotADirectory(self.root.clone()));
        }

        // The root was resolved with `metadata`, so a link to a directory is
        // walked as that directory.
        let mut root = self.build_directory(&self.root).map_err(|e| {
            error!("Tree build failed: {}", e);
            e
        })?;
        root.set_name(ROOT_NAME);

        let stats = root.stats();
        info!(
            files = stats.files,
            directories = stats.directories,
            symlinks = stats.symlinks,
            total_size = stats.total_size,
            root_hash = %root.hash(),
            duration_ms = start.elapsed().as_millis(),
            "Tree build completed"
        );

        Ok(root)
    }

    /// Compute the root hash of the directory
    ///
    /// Convenience method that builds the tree and returns its root hash.
    pub fn compute_root(&self) -> Result<Digest, TreeError> {
        Ok(self.build()?.hash())
    }

    /// Build the node for `path` without following a final symlink
    fn build_node(&self, path: &Path) -> Result<FsNode, TreeError> {
        let metadata = fs::symlink_metadata(path).map_err(|source| TreeError::Stat {
            path: path.to_path_buf(),
            source,
        })?;

        let file_type = metadata.file_type();
        if file_type.is_dir() {
            self.build_directory(path)
        } else if file_type.is_symlink() {
            self.build_symbolic(path)
        } else if file_type.is_file() {
            self.build_file(path, &metadata)
        } else {
            Err(TreeError::UnsupportedFileType(path.to_path_buf()))
        }
    }

    /// Build a directory node from all of its entries
    fn build_directory(&self, dir_path: &Path) -> Result<FsNode, TreeError> {
        let read_dir_error = |source| TreeError::ReadDir {
            path: dir_path.to_path_buf(),
            source,
        };

        let mut entries = Vec::new();
        for entry in fs::read_dir(dir_path).map_err(read_dir_error)? {
            let entry = entry.map_err(read_dir_error)?;
            entries.push(self.build_node(&dir_path.join(entry.file_name()))?);
        }

        debug!(path = %dir_path.display(), entry_count = entries.len(), "Built directory");
        Ok(FsNode::directory(node_name(dir_path)?, entries))
    }

    /// Build a symbolic link node from its unresolved target
    fn build_symbolic(&self, path: &Path) -> Result<FsNode, TreeError> {
        let target = fs::read_link(path).map_err(|source| TreeError::ReadLink {
            path: path.to_path_buf(),
            source,
        })?;
        let link = target
            .into_os_string()
            .into_string()
            .map_err(|_| TreeError::InvalidName(path.to_path_buf()))?;

        trace!(path = %path.display(), link = %link, "Built symbolic link");
        Ok(FsNode::symbolic(node_name(path)?, link))
    }

    /// Hash a regular file and build its node
    fn build_file(&self, path: &Path, metadata: &Metadata) -> Result<FsNode, TreeError> {
        let hash = self
            .hasher
            .content_hash(path)
            .map_err(|source| TreeError::ContentHash {
                path: path.to_path_buf(),
                source,
            })?;

        trace!(path = %path.display(), hash = %hash, size = metadata.len(), "Hashed file");
        Ok(FsNode::file(node_name(path)?, hash, metadata.len()))
    }
}

/// Base name of `path` as UTF-8.
///
/// Paths without a final component (`/`, `..`) get an empty name; this only
/// happens for the root, which is renamed afterwards.
fn node_name(path: &Path) -> Result<String, TreeError> {
    match path.file_name() {
        Some(name) => name
            .to_str()
            .map(str::to_owned)
            .ok_or_else(|| TreeError::InvalidName(path.to_path_buf())),
        None => Ok(String::new()),
    }
}
