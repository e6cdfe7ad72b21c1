//! Error types for sctcheck-crypto

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Key generation failed: {0}")]
    KeyGeneration(String),

    #[error("Signing failed: {0}")]
    Signing(String),

    /// The signature does not verify under the given key and scheme
    #[error("{scheme} signature did not verify")]
    BadSignature { scheme: crate::SigningScheme },

    /// The key is well formed but not one CT logs may use
    #[error("Unsupported log key: {0}")]
    UnsupportedKey(String),

    /// The key bytes could not be parsed
    #[error("Malformed key: {0}")]
    MalformedKey(String),

    #[error("DER encoding failed: {0}")]
    Der(#[from] der::Error),
}

impl From<aws_lc_rs::error::KeyRejected> for Error {
    fn from(e: aws_lc_rs::error::KeyRejected) -> Self {
        Error::MalformedKey(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
