//! Verification outcomes

use chrono::{DateTime, Duration, Utc};
use sctcheck_types::LogId;
use thiserror::Error;

/// Where a batch of SCTs came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvidenceSourceKind {
    /// The TLS `signed_certificate_timestamp` extension
    Handshake,
    /// The SCT list extension of the leaf certificate
    Embedded,
    /// The SCT list extension of a stapled OCSP response
    Ocsp,
}

impl EvidenceSourceKind {
    pub fn name(&self) -> &'static str {
        match self {
            EvidenceSourceKind::Handshake => "handshake",
            EvidenceSourceKind::Embedded => "embedded",
            EvidenceSourceKind::Ocsp => "ocsp",
        }
    }
}

impl std::fmt::Display for EvidenceSourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How the inclusion requirement of an accepted SCT was met
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InclusionStatus {
    /// An audit path reproduced a signed tree head of this size
    Proven { tree_size: u64 },
    /// No proof, but the SCT is younger than the log's maximum merge delay
    PendingWithinMmd { age: Duration },
}

/// Details of an SCT that passed verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedSct {
    /// Set by the evidence checker; `None` when checked directly
    pub source: Option<EvidenceSourceKind>,
    pub log_id: LogId,
    pub log_description: String,
    pub timestamp: DateTime<Utc>,
    pub inclusion: InclusionStatus,
}

/// Why an SCT, a source or a whole check did not verify
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    #[error("no connection state")]
    NoConnectionState,

    #[error("no peer certificates")]
    NoPeerCertificates,

    #[error("chain build failure: {0}")]
    ChainBuildFailure(String),

    #[error("no SCT evidence found")]
    NoEvidenceFound,

    #[error("malformed SCT: {0}")]
    MalformedSct(String),

    #[error("SCT from unknown log {0}")]
    UnknownLog(LogId),

    #[error("SCT signature does not verify for log {0}")]
    SignatureMismatch(LogId),

    #[error("no inclusion proof and SCT from log {0} is older than its maximum merge delay")]
    InclusionFailedStale(LogId),

    #[error("SCT from log {0} is timestamped in the future")]
    TimestampInFuture(LogId),
}

/// Overall result of checking a connection's evidence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationOutcome {
    Verified(VerifiedSct),
    Failed {
        reason: FailureReason,
        /// The source the reason was recorded for, if any
        source: Option<EvidenceSourceKind>,
    },
}

impl VerificationOutcome {
    pub fn is_verified(&self) -> bool {
        matches!(self, VerificationOutcome::Verified(_))
    }

    pub fn reason(&self) -> Option<&FailureReason> {
        match self {
            VerificationOutcome::Verified(_) => None,
            VerificationOutcome::Failed { reason, .. } => Some(reason),
        }
    }

    pub fn into_result(self) -> Result<VerifiedSct, FailureReason> {
        match self {
            VerificationOutcome::Verified(sct) => Ok(sct),
            VerificationOutcome::Failed { reason, .. } => Err(reason),
        }
    }
}
