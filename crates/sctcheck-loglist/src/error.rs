//! Error types for log list and registry operations

use sctcheck_types::LogId;
use thiserror::Error;

/// Errors that can occur while loading a log list or building a registry
#[derive(Debug, Error)]
pub enum Error {
    /// JSON parsing error
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading the log list from disk failed
    #[error("failed to read log list: {0}")]
    Io(#[from] std::io::Error),

    /// A log key could not be used for verification
    #[error("invalid key for log {description:?}: {source}")]
    InvalidKey {
        description: String,
        #[source]
        source: sctcheck_crypto::Error,
    },

    /// The declared log ID is not the hash of the log key
    #[error("log ID mismatch for {description:?}: declared {declared}, key hashes to {computed}")]
    LogIdMismatch {
        description: String,
        declared: LogId,
        computed: LogId,
    },

    /// Two logs share an identifier
    #[error("duplicate log ID: {0}")]
    DuplicateLog(LogId),

    /// Maximum merge delay outside the representable range
    #[error("invalid maximum merge delay for log {0:?}")]
    InvalidMmd(String),
}

/// Result type for log list and registry operations
pub type Result<T> = std::result::Result<T, Error>;
