//! RFC 6962 log client for sctcheck
//!
//! [`CtLogClient`] speaks the `get-sth` and `get-proof-by-hash` endpoints of
//! a Certificate Transparency log. [`HttpInclusionProver`] plugs it into
//! [`sctcheck_verify::SctVerifier`] so SCTs older than their log's maximum
//! merge delay can still be accepted when the log proves inclusion.

pub mod client;
pub mod config;
pub mod error;
pub mod prover;

pub use client::{CtLogClient, ProofByHash};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use prover::HttpInclusionProver;
