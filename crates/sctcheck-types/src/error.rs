//! Error types for sctcheck-types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Base64 decoding error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Decoded data had the wrong length or shape
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),
}

pub type Result<T> = std::result::Result<T, Error>;
