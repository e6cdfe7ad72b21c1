//! Signed tree heads (RFC 6962 section 3.5)

use crate::error::{Error, Result};
use crate::sct::{scheme_matches_log, DigitallySigned};
use sctcheck_loglist::Log;
use sctcheck_types::Sha256Hash;
use serde::{Deserialize, Serialize};
use tls_codec::{SerializeBytes, TlsSerializeBytes, TlsSize};

const TREE_HASH: u8 = 1;

/// The `digitally-signed` input of a tree head signature
#[derive(Debug, TlsSerializeBytes, TlsSize)]
struct TreeHeadSignatureInput {
    version: u8,
    signature_type: u8,
    timestamp: u64,
    tree_size: u64,
    sha256_root_hash: [u8; 32],
}

/// A signed tree head as returned by `get-sth`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedTreeHead {
    pub tree_size: u64,
    /// Milliseconds since the Unix epoch
    pub timestamp: u64,
    pub sha256_root_hash: Sha256Hash,
    /// TLS-encoded `DigitallySigned`
    #[serde(with = "sctcheck_types::base64_bytes")]
    pub tree_head_signature: Vec<u8>,
}

impl SignedTreeHead {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The bytes covered by the tree head signature
    pub fn signed_data(&self) -> Result<Vec<u8>> {
        TreeHeadSignatureInput {
            version: 0,
            signature_type: TREE_HASH,
            timestamp: self.timestamp,
            tree_size: self.tree_size,
            sha256_root_hash: *self.sha256_root_hash.as_bytes(),
        }
        .tls_serialize()
        .map_err(|e| Error::Encoding(format!("failed to serialize tree head: {}", e)))
    }

    /// Check the tree head signature with the log's key
    pub fn verify(&self, log: &Log) -> Result<()> {
        let signed = DigitallySigned::decode(&self.tree_head_signature)
            .map_err(|e| Error::TreeHead(e.to_string()))?;
        let scheme = signed
            .scheme()
            .map_err(|e| Error::TreeHead(e.to_string()))?;

        if !scheme_matches_log(scheme, log.scheme) {
            return Err(Error::TreeHead(format!(
                "tree head signed with {} but log {} uses {}",
                scheme, log.description, log.scheme
            )));
        }

        log.verification_key(scheme)
            .verify(&self.signed_data()?, &signed.signature)
            .map_err(|e| Error::TreeHead(format!("tree head signature invalid: {}", e)))
    }
}
