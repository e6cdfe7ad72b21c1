//! DER-encoded key material

use serde::{Deserialize, Serialize};

/// A DER-encoded SubjectPublicKeyInfo, carried as base64 in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DerPublicKey(#[serde(with = "crate::base64_bytes")] Vec<u8>);

impl DerPublicKey {
    pub fn new(der: Vec<u8>) -> Self {
        DerPublicKey(der)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for DerPublicKey {
    fn from(der: Vec<u8>) -> Self {
        DerPublicKey(der)
    }
}

impl AsRef<[u8]> for DerPublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
