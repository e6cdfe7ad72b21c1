//! RFC 6962 log client (section 4 of the RFC)

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use reqwest::StatusCode;
use sctcheck_types::Sha256Hash;
use sctcheck_verify::SignedTreeHead;
use serde::{Deserialize, Serialize};

/// Response of `get-proof-by-hash`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofByHash {
    pub leaf_index: u64,
    /// Base64 node hashes, leaf upwards
    pub audit_path: Vec<Sha256Hash>,
}

/// A client for one CT log
#[derive(Debug, Clone)]
pub struct CtLogClient {
    /// Base URL of the log, without a trailing slash
    url: String,
    client: reqwest::Client,
}

impl CtLogClient {
    /// Create a client with default settings
    pub fn new(url: impl Into<String>) -> Result<Self> {
        Self::with_config(url, &ClientConfig::default())
    }

    pub fn with_config(url: impl Into<String>, config: &ClientConfig) -> Result<Self> {
        Ok(Self::with_http_client(url, config.build_http_client()?))
    }

    /// Reuse an existing HTTP client (and its connection pool)
    pub fn with_http_client(url: impl Into<String>, client: reqwest::Client) -> Self {
        let url: String = url.into();
        Self {
            url: url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn endpoint(&self, method: &str) -> String {
        format!("{}/ct/v1/{}", self.url, method)
    }

    /// Fetch the latest signed tree head
    pub async fn get_sth(&self) -> Result<SignedTreeHead> {
        let url = self.endpoint("get-sth");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::Api(format!(
                "failed to get STH: {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| Error::Http(format!("failed to parse JSON: {}", e)))
    }

    /// Fetch the audit path for a leaf hash in the tree of `tree_size`
    pub async fn get_proof_by_hash(
        &self,
        leaf_hash: &Sha256Hash,
        tree_size: u64,
    ) -> Result<ProofByHash> {
        let url = self.endpoint("get-proof-by-hash");
        let response = self
            .client
            .get(&url)
            .query(&[
                ("hash", leaf_hash.to_base64()),
                ("tree_size", tree_size.to_string()),
            ])
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        match response.status() {
            status if status.is_success() => {}
            // Logs answer 400 for hashes they have not merged yet
            StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND => {
                let body = response.text().await.unwrap_or_default();
                return Err(Error::NotFound(format!(
                    "no proof for {} at tree size {}: {}",
                    leaf_hash.to_base64(),
                    tree_size,
                    body
                )));
            }
            status => {
                return Err(Error::Api(format!(
                    "failed to get proof by hash: {}",
                    status
                )))
            }
        }

        response
            .json()
            .await
            .map_err(|e| Error::Http(format!("failed to parse JSON: {}", e)))
    }
}
