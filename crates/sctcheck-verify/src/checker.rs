//! Evidence orchestration across SCT sources
//!
//! Sources are tried in a fixed order: handshake, embedded, OCSP. The first
//! SCT that verifies anywhere ends the check. When nothing verifies, the
//! reported reason is the one recorded for the most recently tried source,
//! and within a source the last SCT's failure wins. The final source always
//! records something, so an empty OCSP list reports `NoEvidenceFound` even if
//! an earlier source held a concrete cryptographic failure. Callers that
//! surface reasons to users rely on exactly this precedence.

use crate::chain::CertificateChain;
use crate::error::Error;
use crate::leaf::{LogEntryType, MerkleLeafBuilder, MerkleTreeLeaf};
use crate::outcome::{EvidenceSourceKind, FailureReason, VerificationOutcome, VerifiedSct};
use crate::sct::{embedded_scts, SerializedSct};
use crate::verifier::SctVerifier;
use chrono::{DateTime, Utc};
use std::borrow::Cow;

/// Order in which evidence sources are tried
pub const SOURCE_ORDER: [EvidenceSourceKind; 3] = [
    EvidenceSourceKind::Handshake,
    EvidenceSourceKind::Embedded,
    EvidenceSourceKind::Ocsp,
];

/// Everything a TLS connection offers as SCT evidence
#[derive(Debug, Clone, Default)]
pub struct ConnectionEvidence {
    /// Peer chain, leaf first
    pub chain: CertificateChain,
    /// SCTs from the TLS extension
    pub handshake_scts: Vec<SerializedSct>,
    /// SCTs from the leaf certificate; `None` reads them from the leaf
    pub embedded_scts: Option<Vec<SerializedSct>>,
    /// SCTs from the stapled OCSP response
    pub ocsp_scts: Vec<SerializedSct>,
}

impl ConnectionEvidence {
    pub fn new(chain: CertificateChain) -> Self {
        Self {
            chain,
            ..Default::default()
        }
    }

    pub fn with_handshake_scts(mut self, scts: Vec<SerializedSct>) -> Self {
        self.handshake_scts = scts;
        self
    }

    pub fn with_embedded_scts(mut self, scts: Vec<SerializedSct>) -> Self {
        self.embedded_scts = Some(scts);
        self
    }

    pub fn with_ocsp_scts(mut self, scts: Vec<SerializedSct>) -> Self {
        self.ocsp_scts = scts;
        self
    }

    fn scts(&self, kind: EvidenceSourceKind) -> Result<Cow<'_, [SerializedSct]>, FailureReason> {
        match kind {
            EvidenceSourceKind::Handshake => Ok(Cow::Borrowed(&self.handshake_scts)),
            EvidenceSourceKind::Ocsp => Ok(Cow::Borrowed(&self.ocsp_scts)),
            EvidenceSourceKind::Embedded => match &self.embedded_scts {
                Some(scts) => Ok(Cow::Borrowed(scts)),
                None => {
                    let Some(leaf) = self.chain.leaf() else {
                        return Ok(Cow::Owned(Vec::new()));
                    };
                    embedded_scts(leaf).map(Cow::Owned).map_err(|e| match e {
                        Error::Certificate(msg) => FailureReason::ChainBuildFailure(msg),
                        other => FailureReason::MalformedSct(other.to_string()),
                    })
                }
            },
        }
    }
}

/// Runs the source fallback over a connection's evidence
#[derive(Debug, Clone)]
pub struct EvidenceChecker<'a> {
    verifier: SctVerifier<'a>,
}

impl<'a> EvidenceChecker<'a> {
    pub fn new(verifier: SctVerifier<'a>) -> Self {
        Self { verifier }
    }

    pub fn verifier(&self) -> &SctVerifier<'a> {
        &self.verifier
    }

    /// Check a connection's evidence as of now
    ///
    /// `None` stands for a connection whose state is unavailable.
    pub fn check_connection_evidence(
        &self,
        evidence: Option<&ConnectionEvidence>,
    ) -> VerificationOutcome {
        self.check_connection_evidence_at(evidence, Utc::now())
    }

    pub fn check_connection_evidence_at(
        &self,
        evidence: Option<&ConnectionEvidence>,
        now: DateTime<Utc>,
    ) -> VerificationOutcome {
        let Some(evidence) = evidence else {
            return VerificationOutcome::Failed {
                reason: FailureReason::NoConnectionState,
                source: None,
            };
        };
        if evidence.chain.is_empty() {
            return VerificationOutcome::Failed {
                reason: FailureReason::NoPeerCertificates,
                source: None,
            };
        }

        let mut last_reason = FailureReason::NoEvidenceFound;
        let mut last_source = None;

        for kind in SOURCE_ORDER {
            match self.check_source_at(kind, evidence, now) {
                Ok(verified) => {
                    tracing::debug!("{} SCT from {} verified", kind, verified.log_description);
                    return VerificationOutcome::Verified(verified);
                }
                Err(reason) => {
                    tracing::debug!("{} source failed: {}", kind, reason);
                    last_reason = reason;
                    last_source = Some(kind);
                }
            }
        }

        VerificationOutcome::Failed {
            reason: last_reason,
            source: last_source,
        }
    }

    /// Check one source on its own, reporting that source's reason
    pub fn check_source_at(
        &self,
        kind: EvidenceSourceKind,
        evidence: &ConnectionEvidence,
        now: DateTime<Utc>,
    ) -> Result<VerifiedSct, FailureReason> {
        let scts = evidence.scts(kind)?;
        if scts.is_empty() {
            return Err(FailureReason::NoEvidenceFound);
        }

        let leaf = source_leaf(kind, &evidence.chain)?;

        let mut last_reason = FailureReason::NoEvidenceFound;
        for sct in scts.iter() {
            match self.verifier.check_one_at(sct, &leaf, now) {
                Ok(mut verified) => {
                    verified.source = Some(kind);
                    return Ok(verified);
                }
                Err(reason) => last_reason = reason,
            }
        }
        Err(last_reason)
    }

    /// Pass/fail check of a single SCT from a known source
    pub fn verify_one(
        &self,
        kind: EvidenceSourceKind,
        sct: &SerializedSct,
        chain: &CertificateChain,
    ) -> bool {
        self.verify_one_at(kind, sct, chain, Utc::now())
    }

    pub fn verify_one_at(
        &self,
        kind: EvidenceSourceKind,
        sct: &SerializedSct,
        chain: &CertificateChain,
        now: DateTime<Utc>,
    ) -> bool {
        if chain.is_empty() {
            return false;
        }
        // an embedded SCT needs a leaf carrying the SCT list extension
        if kind == EvidenceSourceKind::Embedded && !carries_embedded_scts(chain) {
            return false;
        }
        source_leaf(kind, chain)
            .and_then(|leaf| self.verifier.check_one_at(sct, &leaf, now))
            .is_ok()
    }

    pub fn verify_handshake_sct(&self, sct: &SerializedSct, chain: &CertificateChain) -> bool {
        self.verify_one(EvidenceSourceKind::Handshake, sct, chain)
    }

    pub fn verify_embedded_sct(&self, sct: &SerializedSct, chain: &CertificateChain) -> bool {
        self.verify_one(EvidenceSourceKind::Embedded, sct, chain)
    }

    pub fn verify_ocsp_sct(&self, sct: &SerializedSct, chain: &CertificateChain) -> bool {
        self.verify_one(EvidenceSourceKind::Ocsp, sct, chain)
    }
}

fn carries_embedded_scts(chain: &CertificateChain) -> bool {
    chain
        .leaf()
        .and_then(|leaf| embedded_scts(leaf).ok())
        .is_some_and(|scts| !scts.is_empty())
}

/// The leaf SCTs from `kind` were issued over
fn source_leaf(
    kind: EvidenceSourceKind,
    chain: &CertificateChain,
) -> Result<MerkleTreeLeaf, FailureReason> {
    let built = match kind {
        EvidenceSourceKind::Handshake | EvidenceSourceKind::Ocsp => {
            MerkleLeafBuilder::build_from_chain(chain, LogEntryType::X509Entry, 0)
        }
        EvidenceSourceKind::Embedded => match (chain.leaf(), chain.issuer()) {
            (Some(leaf), Some(issuer)) => MerkleLeafBuilder::build_for_embedded_sct(leaf, issuer),
            _ => {
                return Err(FailureReason::ChainBuildFailure(
                    "no issuer certificate".to_string(),
                ))
            }
        },
    };

    built.map_err(|e| match e {
        Error::ChainBuild(msg) => FailureReason::ChainBuildFailure(msg),
        other => FailureReason::ChainBuildFailure(other.to_string()),
    })
}
