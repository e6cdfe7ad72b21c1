//! Error types for sctcheck-certlevel

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The certificate or one of its extensions did not decode
    #[error("Certificate error: {0}")]
    Certificate(String),

    #[error("DER error: {0}")]
    Der(#[from] der::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
