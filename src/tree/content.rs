//! File content hashing
//!
//! A file's digest is produced by a [`ContentHasher`]. The builder only
//! relies on the contract (same bytes, same digest); the default
//! [`ChunkedMerkleHasher`] computes a Keccak-256 Merkle root over fixed-size
//! chunks of the file.

use crate::tree::hasher;
use crate::types::{Digest, DIGEST_LEN};
use rs_merkle::{Hasher, MerkleTree};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Size in bytes of one content chunk (a Merkle leaf)
pub const CHUNK_SIZE: usize = 256;

/// Computes the digest of a file's full content.
pub trait ContentHasher: Send + Sync {
    fn content_hash(&self, path: &Path) -> io::Result<Digest>;
}

impl<T: ContentHasher + ?Sized> ContentHasher for &T {
    fn content_hash(&self, path: &Path) -> io::Result<Digest> {
        (**self).content_hash(path)
    }
}

/// Keccak-256 as an `rs_merkle` hashing algorithm
#[derive(Clone)]
pub struct Keccak256Algorithm;

impl Hasher for Keccak256Algorithm {
    type Hash = [u8; DIGEST_LEN];

    fn hash(data: &[u8]) -> [u8; DIGEST_LEN] {
        hasher::keccak256(data).0
    }
}

/// Merkle root over zero-padded 256-byte chunks.
///
/// Leaves are `keccak256(chunk)`. Interior nodes are `keccak256(left || right)`
/// and an unpaired node is promoted to the next level unchanged. An empty
/// file hashes to `keccak256([])`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChunkedMerkleHasher;

impl ChunkedMerkleHasher {
    pub fn new() -> Self {
        Self
    }

    /// Merkle root of everything readable from `reader`
    pub fn hash_reader<R: Read>(&self, mut reader: R) -> io::Result<Digest> {
        let mut leaves: Vec<[u8; DIGEST_LEN]> = Vec::new();
        let mut chunk = [0u8; CHUNK_SIZE];

        loop {
            let filled = read_chunk(&mut reader, &mut chunk)?;
            if filled == 0 {
                break;
            }
            chunk[filled..].fill(0);
            leaves.push(Keccak256Algorithm::hash(&chunk));
            if filled < CHUNK_SIZE {
                break;
            }
        }

        if leaves.is_empty() {
            return Ok(hasher::keccak256(&[]));
        }

        let root = MerkleTree::<Keccak256Algorithm>::from_leaves(&leaves).root();
        Ok(root.map(Digest).unwrap_or_else(|| hasher::keccak256(&[])))
    }

    /// Merkle root of an in-memory buffer
    pub fn hash_bytes(&self, data: &[u8]) -> Digest {
        // Reading from a slice cannot fail
        self.hash_reader(data).unwrap_or_else(|_| hasher::keccak256(&[]))
    }
}

impl ContentHasher for ChunkedMerkleHasher {
    fn content_hash(&self, path: &Path) -> io::Result<Digest> {
        let file = File::open(path)?;
        self.hash_reader(BufReader::new(file))
    }
}

/// Fill `buf` as far as the reader allows; returns the number of bytes read.
fn read_chunk<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
