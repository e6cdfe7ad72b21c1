//! Error types for sctcheck-merkle

use thiserror::Error;

/// Errors that can occur in Merkle tree operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid proof format
    #[error("Invalid proof: {0}")]
    InvalidProof(String),

    /// Invalid tree size
    #[error("Invalid tree size: {0}")]
    InvalidTreeSize(String),

    /// Invalid leaf index
    #[error("Invalid leaf index: {0}")]
    InvalidLeafIndex(String),

    /// Computed root differs from the expected one
    #[error("Hash mismatch: expected {expected}, got {actual}")]
    HashMismatch { expected: String, actual: String },
}

/// Result type for Merkle tree operations
pub type Result<T> = std::result::Result<T, Error>;
