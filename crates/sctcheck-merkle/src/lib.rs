//! RFC 6962 Merkle tree verification
//!
//! Leaf and node hashing with the RFC 6962 domain separation prefixes, and
//! verification of the audit paths CT logs return from `get-proof-by-hash`.

pub mod error;
pub mod proof;
pub mod tree;

pub use error::{Error, Result};
pub use proof::{verify_inclusion_proof, verify_inclusion_proof_base64, InclusionProof};
pub use tree::{hash_children, hash_leaf, LEAF_HASH_PREFIX, NODE_HASH_PREFIX};
