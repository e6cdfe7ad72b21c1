//! Core types for Certificate Transparency verification
//!
//! This crate provides the small, strongly-typed building blocks shared by the
//! other sctcheck crates: fixed-size digests, CT log identifiers and DER key
//! material with their base64 JSON representations.

pub mod encoding;
pub mod error;
pub mod key;
pub mod log_id;

pub use encoding::{base64_bytes, Sha256Hash};
pub use error::{Error, Result};
pub use key::DerPublicKey;
pub use log_id::LogId;
