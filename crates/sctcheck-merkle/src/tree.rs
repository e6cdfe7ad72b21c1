//! Merkle tree hashing utilities
//!
//! RFC 6962 section 2.1: SHA-256 with a one byte prefix separating leaves
//! (0x00) from interior nodes (0x01).

use sctcheck_types::Sha256Hash;
use sha2::{Digest, Sha256};

pub const LEAF_HASH_PREFIX: u8 = 0x00;

pub const NODE_HASH_PREFIX: u8 = 0x01;

/// Hash a leaf node
///
/// Returns: SHA256(0x00 || leaf_data)
pub fn hash_leaf(data: &[u8]) -> Sha256Hash {
    let mut hasher = Sha256::new();
    hasher.update([LEAF_HASH_PREFIX]);
    hasher.update(data);
    Sha256Hash::from_bytes(hasher.finalize().into())
}

/// Hash two child nodes to create a parent node
///
/// Returns: SHA256(0x01 || left || right)
pub fn hash_children(left: &Sha256Hash, right: &Sha256Hash) -> Sha256Hash {
    let mut hasher = Sha256::new();
    hasher.update([NODE_HASH_PREFIX]);
    hasher.update(left.as_bytes());
    hasher.update(right.as_bytes());
    Sha256Hash::from_bytes(hasher.finalize().into())
}
