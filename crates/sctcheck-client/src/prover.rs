//! Inclusion proofs fetched from the log over HTTP

use crate::client::CtLogClient;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use sctcheck_verify::{InclusionEvidence, InclusionProver, ProofRequest, ProofUnavailable};

/// An [`InclusionProver`] that asks the issuing log for a proof
///
/// Each request fetches the log's current tree head and then the audit path
/// for the leaf in that tree, bounded by the request's deadline. Verification
/// stays synchronous, so the prover drives its own single-threaded runtime.
/// Called from inside another tokio runtime it cannot block, and reports every
/// proof as unavailable.
pub struct HttpInclusionProver {
    runtime: tokio::runtime::Runtime,
    http: reqwest::Client,
}

impl HttpInclusionProver {
    pub fn new() -> Result<Self> {
        Self::with_config(&ClientConfig::default())
    }

    pub fn with_config(config: &ClientConfig) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self {
            runtime,
            http: config.build_http_client()?,
        })
    }

    async fn fetch(&self, url: &str, request: &ProofRequest<'_>) -> Result<InclusionEvidence> {
        let client = CtLogClient::with_http_client(url, self.http.clone());

        let tree_head = client.get_sth().await?;
        if tree_head.timestamp < request.sct_timestamp {
            return Err(Error::NotFound(format!(
                "latest tree head of {} predates the SCT",
                request.log.description
            )));
        }

        let proof = client
            .get_proof_by_hash(&request.leaf_hash, tree_head.tree_size)
            .await?;

        Ok(InclusionEvidence {
            tree_head,
            leaf_index: proof.leaf_index,
            audit_path: proof.audit_path,
        })
    }
}

impl InclusionProver for HttpInclusionProver {
    fn fetch_proof(
        &self,
        request: &ProofRequest<'_>,
    ) -> std::result::Result<InclusionEvidence, ProofUnavailable> {
        let url = request.log.url.as_deref().ok_or_else(|| {
            ProofUnavailable::Fetch(format!("no URL for log {}", request.log.description))
        })?;
        if request.is_expired() {
            return Err(ProofUnavailable::Timeout);
        }
        if tokio::runtime::Handle::try_current().is_ok() {
            tracing::warn!("cannot fetch inclusion proof from {} inside an async runtime", url);
            return Err(ProofUnavailable::Fetch(
                "inclusion prover called from inside an async runtime".to_string(),
            ));
        }

        tracing::debug!("fetching inclusion proof from {}", url);
        let fetched = self.runtime.block_on(async {
            match request.remaining() {
                Some(remaining) => tokio::time::timeout(remaining, self.fetch(url, request))
                    .await
                    .map_err(|_| ProofUnavailable::Timeout),
                None => Ok(self.fetch(url, request).await),
            }
        })?;

        fetched.map_err(|e| match e {
            Error::NotFound(_) => ProofUnavailable::NotFound,
            other => ProofUnavailable::Fetch(other.to_string()),
        })
    }
}
