//! Error types for sctcheck-verify
//!
//! These cover malformed inputs and encoding problems. A verification verdict
//! is never an `Error`; it is a [`FailureReason`](crate::FailureReason).

use thiserror::Error;

/// Errors that can occur while decoding or encoding CT structures
#[derive(Error, Debug)]
pub enum Error {
    /// An SCT did not decode
    #[error("Malformed SCT: {0}")]
    MalformedSct(String),

    /// An SCT list did not decode
    #[error("Malformed SCT list: {0}")]
    MalformedSctList(String),

    /// The chain cannot produce the requested leaf
    #[error("Chain build failure: {0}")]
    ChainBuild(String),

    /// Certificate parsing error
    #[error("Certificate error: {0}")]
    Certificate(String),

    /// TLS presentation-language encoding error
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Signed tree head could not be decoded or verified
    #[error("Tree head error: {0}")]
    TreeHead(String),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Merkle proof error
    #[error("Merkle proof error: {0}")]
    Merkle(#[from] sctcheck_merkle::Error),

    /// Signature verification error
    #[error("Crypto error: {0}")]
    Crypto(#[from] sctcheck_crypto::Error),
}

/// Result type for sctcheck-verify operations
pub type Result<T> = std::result::Result<T, Error>;
