//! Certificate Transparency SCT verification
//!
//! Given a peer certificate chain and the SCTs a TLS connection offers, this
//! crate decides whether at least one SCT proves the certificate was logged:
//!
//! - [`MerkleLeafBuilder`] rebuilds the exact leaf a log signed, either the
//!   certificate itself or the precertificate behind an embedded SCT.
//! - [`SctVerifier`] checks one SCT: known log, valid signature, then
//!   inclusion in the log's tree or, failing that, an age below the log's
//!   maximum merge delay.
//! - [`EvidenceChecker`] walks the handshake, embedded and OCSP sources in
//!   that order and stops at the first SCT that verifies.
//!
//! Verdicts are values ([`VerificationOutcome`], [`FailureReason`]); [`Error`]
//! is reserved for inputs that cannot be decoded or encoded at all.
//!
//! # Example
//!
//! ```no_run
//! use sctcheck_loglist::LogRegistry;
//! use sctcheck_verify::{
//!     CertificateChain, ConnectionEvidence, EvidenceChecker, SctVerifier,
//! };
//!
//! let registry = LogRegistry::from_file("log_list.json").unwrap();
//! let chain = CertificateChain::from_pem(&std::fs::read_to_string("chain.pem").unwrap()).unwrap();
//!
//! let checker = EvidenceChecker::new(SctVerifier::new(&registry));
//! let outcome = checker.check_connection_evidence(Some(&ConnectionEvidence::new(chain)));
//! println!("{:?}", outcome);
//! ```

pub mod chain;
pub mod checker;
pub mod config;
pub mod error;
pub mod inclusion;
pub mod leaf;
pub mod outcome;
pub mod sct;
pub mod tree_head;
pub mod verifier;

pub use chain::CertificateChain;
pub use checker::{ConnectionEvidence, EvidenceChecker, SOURCE_ORDER};
pub use config::VerifierConfig;
pub use error::{Error, Result};
pub use inclusion::{
    verify_inclusion, InclusionEvidence, InclusionProver, NoInclusionProofs, ProofRequest,
    ProofUnavailable, StaticInclusionProofs,
};
pub use leaf::{LogEntryType, MerkleLeafBuilder, MerkleTreeLeaf};
pub use outcome::{
    EvidenceSourceKind, FailureReason, InclusionStatus, VerificationOutcome, VerifiedSct,
};
pub use sct::{
    algorithm_for_scheme, embedded_scts, encode_sct_list, parse_sct_list, scheme_for_algorithm,
    DigitallySigned, SerializedSct, SignedCertificateTimestamp,
};
pub use tree_head::SignedTreeHead;
pub use verifier::SctVerifier;

pub use rustls_pki_types::CertificateDer;
