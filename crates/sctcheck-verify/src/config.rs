//! Verifier configuration

use std::time::Duration;

/// Settings for [`SctVerifier`](crate::SctVerifier)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifierConfig {
    /// Budget for fetching an inclusion proof; the prover gets it as a deadline
    pub proof_timeout: Option<Duration>,
    /// Reject SCTs timestamped further than this past the check time
    pub max_future_skew: Option<chrono::Duration>,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            proof_timeout: Some(Duration::from_secs(10)),
            max_future_skew: None,
        }
    }
}

impl VerifierConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_proof_timeout(mut self, timeout: Duration) -> Self {
        self.proof_timeout = Some(timeout);
        self
    }

    /// Let the prover take as long as it needs
    pub fn without_proof_timeout(mut self) -> Self {
        self.proof_timeout = None;
        self
    }

    /// Fail SCTs whose timestamp is more than `skew` ahead of the check time
    pub fn reject_future_timestamps(mut self, skew: chrono::Duration) -> Self {
        self.max_future_skew = Some(skew);
        self
    }
}
