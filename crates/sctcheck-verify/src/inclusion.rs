//! Inclusion proof sources and checks
//!
//! Proving inclusion needs network access to the log, which this crate does
//! not do itself. Instead the verifier asks an [`InclusionProver`]; when it
//! cannot produce evidence in time the maximum merge delay rule decides.

use crate::error::{Error, Result};
use crate::tree_head::SignedTreeHead;
use sctcheck_loglist::Log;
use sctcheck_types::{LogId, Sha256Hash};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use thiserror::Error;

/// What the verifier asks a prover for
#[derive(Debug, Clone)]
pub struct ProofRequest<'a> {
    pub log: &'a Log,
    /// Hash of the leaf the SCT was verified against
    pub leaf_hash: Sha256Hash,
    /// SCT timestamp in milliseconds
    pub sct_timestamp: u64,
    /// Give up after this instant
    pub deadline: Option<Instant>,
}

impl ProofRequest<'_> {
    /// Time left before the deadline, `None` if there is no deadline
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    pub fn is_expired(&self) -> bool {
        self.remaining().is_some_and(|left| left.is_zero())
    }
}

/// A tree head and the audit path tying a leaf to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InclusionEvidence {
    pub tree_head: SignedTreeHead,
    pub leaf_index: u64,
    pub audit_path: Vec<Sha256Hash>,
}

/// Why a prover returned no evidence
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProofUnavailable {
    #[error("log has no proof for this leaf")]
    NotFound,

    #[error("proof fetch timed out")]
    Timeout,

    #[error("proof fetch failed: {0}")]
    Fetch(String),
}

/// Supplies inclusion evidence for a leaf in a log
///
/// Implementations must honour [`ProofRequest::deadline`] and report
/// [`ProofUnavailable::Timeout`] rather than block past it.
pub trait InclusionProver: Send + Sync {
    fn fetch_proof(
        &self,
        request: &ProofRequest<'_>,
    ) -> std::result::Result<InclusionEvidence, ProofUnavailable>;
}

/// A prover that never has a proof, leaving every SCT to the MMD rule
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInclusionProofs;

impl InclusionProver for NoInclusionProofs {
    fn fetch_proof(
        &self,
        _request: &ProofRequest<'_>,
    ) -> std::result::Result<InclusionEvidence, ProofUnavailable> {
        Err(ProofUnavailable::NotFound)
    }
}

/// Pre-fetched evidence keyed by log and leaf hash
#[derive(Debug, Clone, Default)]
pub struct StaticInclusionProofs {
    proofs: HashMap<(LogId, Sha256Hash), InclusionEvidence>,
}

impl StaticInclusionProofs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, log_id: LogId, leaf_hash: Sha256Hash, evidence: InclusionEvidence) {
        self.proofs.insert((log_id, leaf_hash), evidence);
    }

    pub fn with_proof(
        mut self,
        log_id: LogId,
        leaf_hash: Sha256Hash,
        evidence: InclusionEvidence,
    ) -> Self {
        self.insert(log_id, leaf_hash, evidence);
        self
    }

    pub fn len(&self) -> usize {
        self.proofs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proofs.is_empty()
    }
}

impl InclusionProver for StaticInclusionProofs {
    fn fetch_proof(
        &self,
        request: &ProofRequest<'_>,
    ) -> std::result::Result<InclusionEvidence, ProofUnavailable> {
        self.proofs
            .get(&(request.log.id, request.leaf_hash))
            .cloned()
            .ok_or(ProofUnavailable::NotFound)
    }
}

/// Check inclusion evidence for a leaf
///
/// The tree head must be signed by `log`, must not predate the SCT and the
/// audit path must reproduce its root.
pub fn verify_inclusion(
    evidence: &InclusionEvidence,
    log: &Log,
    leaf_hash: &Sha256Hash,
    sct_timestamp: u64,
) -> Result<()> {
    let sth = &evidence.tree_head;
    sth.verify(log)?;

    if sth.timestamp < sct_timestamp {
        return Err(Error::TreeHead(format!(
            "tree head at {} predates SCT at {}",
            sth.timestamp, sct_timestamp
        )));
    }

    sctcheck_merkle::verify_inclusion_proof(
        leaf_hash,
        evidence.leaf_index,
        sth.tree_size,
        &evidence.audit_path,
        &sth.sha256_root_hash,
    )?;

    Ok(())
}
