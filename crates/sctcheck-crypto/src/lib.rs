//! Cryptographic primitives for sctcheck
//!
//! SHA-256, log key inspection and signature verification for CT logs, with
//! aws-lc-rs as the backend. ECDSA key generation is included for tests and
//! tooling that need to act as a log.

pub mod error;
pub mod hash;
pub mod public_key;
pub mod signing;
pub mod verification;

pub use error::{Error, Result};
pub use hash::sha256;
pub use signing::{KeyPair, Signature, SigningScheme};
pub use public_key::{signing_scheme_for_spki, signing_scheme_for_spki_der};
pub use verification::VerificationKey;
