//! Per-SCT verification

use crate::config::VerifierConfig;
use crate::inclusion::{verify_inclusion, InclusionProver, NoInclusionProofs, ProofRequest};
use crate::leaf::MerkleTreeLeaf;
use crate::outcome::{FailureReason, InclusionStatus, VerifiedSct};
use crate::sct::{scheme_matches_log, SerializedSct};
use chrono::{DateTime, Utc};
use sctcheck_loglist::LogRegistry;
use std::time::Instant;

static NO_PROOFS: NoInclusionProofs = NoInclusionProofs;

/// Judges one SCT against one leaf
///
/// The registry and prover are borrowed; a verifier is cheap to build per
/// call and many can share the same registry concurrently.
#[derive(Clone)]
pub struct SctVerifier<'a> {
    registry: &'a LogRegistry,
    prover: &'a dyn InclusionProver,
    config: VerifierConfig,
}

impl<'a> SctVerifier<'a> {
    /// A verifier without an inclusion prover, relying on the MMD rule alone
    pub fn new(registry: &'a LogRegistry) -> Self {
        Self {
            registry,
            prover: &NO_PROOFS,
            config: VerifierConfig::default(),
        }
    }

    pub fn with_prover(mut self, prover: &'a dyn InclusionProver) -> Self {
        self.prover = prover;
        self
    }

    pub fn with_config(mut self, config: VerifierConfig) -> Self {
        self.config = config;
        self
    }

    pub fn registry(&self) -> &'a LogRegistry {
        self.registry
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Check an SCT against the leaf of the source it came from, as of now
    pub fn check_one(
        &self,
        sct: &SerializedSct,
        leaf: &MerkleTreeLeaf,
    ) -> Result<VerifiedSct, FailureReason> {
        self.check_one_at(sct, leaf, Utc::now())
    }

    /// Check an SCT against a leaf as of `now`
    ///
    /// `leaf` only supplies the signed entry; the SCT's own timestamp and
    /// extensions are stamped onto it before verifying.
    pub fn check_one_at(
        &self,
        sct: &SerializedSct,
        leaf: &MerkleTreeLeaf,
        now: DateTime<Utc>,
    ) -> Result<VerifiedSct, FailureReason> {
        let sct = sct
            .decode()
            .map_err(|e| FailureReason::MalformedSct(e.to_string()))?;

        let log = self.registry.find_by_id(&sct.log_id).ok_or_else(|| {
            tracing::debug!("SCT from unknown log {}", sct.log_id);
            FailureReason::UnknownLog(sct.log_id)
        })?;

        let scheme = sct.signature.scheme().map_err(|e| {
            tracing::debug!("SCT from {}: {}", log.description, e);
            FailureReason::SignatureMismatch(log.id)
        })?;
        if !scheme_matches_log(scheme, log.scheme) {
            tracing::debug!(
                "SCT from {} signed with {} but log key is {}",
                log.description,
                scheme,
                log.scheme
            );
            return Err(FailureReason::SignatureMismatch(log.id));
        }

        let signed_leaf = leaf.with_sct_fields(sct.timestamp, &sct.extensions);
        let signed_data = signed_leaf
            .to_bytes()
            .map_err(|e| FailureReason::MalformedSct(e.to_string()))?;

        log.verification_key(scheme)
            .verify(&signed_data, &sct.signature.signature)
            .map_err(|_| FailureReason::SignatureMismatch(log.id))?;

        let timestamp = i64::try_from(sct.timestamp)
            .ok()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .ok_or_else(|| {
                FailureReason::MalformedSct(format!("timestamp {} out of range", sct.timestamp))
            })?;

        // a skew too large to add to `now` cannot be exceeded
        if let Some(latest) = self
            .config
            .max_future_skew
            .and_then(|skew| now.checked_add_signed(skew))
        {
            if timestamp > latest {
                return Err(FailureReason::TimestampInFuture(log.id));
            }
        }

        let leaf_hash = signed_leaf
            .leaf_hash()
            .map_err(|e| FailureReason::MalformedSct(e.to_string()))?;
        let request = ProofRequest {
            log,
            leaf_hash,
            sct_timestamp: sct.timestamp,
            // an unrepresentable deadline means no deadline
            deadline: self
                .config
                .proof_timeout
                .and_then(|timeout| Instant::now().checked_add(timeout)),
        };

        let inclusion = match self.prover.fetch_proof(&request) {
            Ok(evidence) => match verify_inclusion(&evidence, log, &leaf_hash, sct.timestamp) {
                Ok(()) => Some(InclusionStatus::Proven {
                    tree_size: evidence.tree_head.tree_size,
                }),
                Err(e) => {
                    tracing::warn!("inclusion proof from {} rejected: {}", log.description, e);
                    None
                }
            },
            Err(unavailable) => {
                tracing::debug!("no inclusion proof from {}: {}", log.description, unavailable);
                None
            }
        };

        let inclusion = match inclusion {
            Some(proven) => proven,
            None => {
                let age = now - timestamp;
                if age >= log.mmd {
                    return Err(FailureReason::InclusionFailedStale(log.id));
                }
                tracing::warn!(
                    "accepting SCT from {} without inclusion proof, {}s into a {}s MMD",
                    log.description,
                    age.num_seconds(),
                    log.mmd.num_seconds()
                );
                InclusionStatus::PendingWithinMmd { age }
            }
        };

        Ok(VerifiedSct {
            source: None,
            log_id: log.id,
            log_description: log.description.clone(),
            timestamp,
            inclusion,
        })
    }
}

impl std::fmt::Debug for SctVerifier<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SctVerifier")
            .field("logs", &self.registry.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
