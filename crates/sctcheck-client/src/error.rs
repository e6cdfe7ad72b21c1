//! Error types for sctcheck-client

use thiserror::Error;

/// Errors that can occur talking to a CT log
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request error
    #[error("HTTP error: {0}")]
    Http(String),

    /// The log answered with an error status
    #[error("API error: {0}")]
    Api(String),

    /// The log does not know the requested leaf or tree
    #[error("not found: {0}")]
    NotFound(String),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The async runtime could not be started
    #[error("runtime error: {0}")]
    Runtime(#[from] std::io::Error),
}

/// Result type for CT log client operations
pub type Result<T> = std::result::Result<T, Error>;
