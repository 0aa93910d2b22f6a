//! Hash computation for filesystem nodes using Keccak-256

use crate::types::{Digest, DIGEST_LEN};
use sha3::{Digest as _, Keccak256};

/// Keccak-256 of arbitrary bytes
pub fn keccak256(data: &[u8]) -> Digest {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let mut out = [0u8; DIGEST_LEN];
    out.copy_from_slice(&hasher.finalize());
    Digest(out)
}

/// Keccak-256 of `left || right` (64 input bytes, no separator)
pub fn keccak256_concat(left: &Digest, right: &Digest) -> Digest {
    let mut hasher = Keccak256::new();
    hasher.update(left.as_bytes());
    hasher.update(right.as_bytes());
    let mut out = [0u8; DIGEST_LEN];
    out.copy_from_slice(&hasher.finalize());
    Digest(out)
}

/// Compute the hash of a symbolic link from its raw target text
pub fn compute_symbolic_hash(link: &str) -> Digest {
    keccak256(link.as_bytes())
}

/// Compute a directory hash from its children's hashes
///
/// `children` must already be in name order. The result is a right fold:
///
/// ```text
/// hash(d[0] || hash(d[1] || ... hash(d[n-1])))
/// ```
///
/// An empty directory hashes to [`Digest::ZERO`] and a single child `d`
/// hashes to `hash(d)`. Existing trees depend on this exact shape.
pub fn compute_directory_hash(children: &[Digest]) -> Digest {
    let Some((last, rest)) = children.split_last() else {
        return Digest::ZERO;
    };

    rest.iter()
        .rev()
        .fold(keccak256(last.as_bytes()), |acc, child| {
            keccak256_concat(child, &acc)
        })
}
