//! Certificate Transparency log identifiers

use crate::encoding::{decode_32, Sha256Hash};
use crate::error::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A CT log identifier: the SHA-256 hash of the log's DER-encoded
/// SubjectPublicKeyInfo (RFC 6962 section 3.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LogId([u8; 32]);

impl LogId {
    pub const fn new(bytes: [u8; 32]) -> Self {
        LogId(bytes)
    }

    /// Parse from the base64 form used by log lists
    pub fn from_base64(s: &str) -> Result<Self> {
        decode_32(s, "log ID").map(LogId)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.0)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<[u8; 32]> for LogId {
    fn from(bytes: [u8; 32]) -> Self {
        LogId(bytes)
    }
}

impl From<Sha256Hash> for LogId {
    fn from(hash: Sha256Hash) -> Self {
        LogId(*hash.as_bytes())
    }
}

impl AsRef<[u8]> for LogId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Display for LogId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_base64())
    }
}

impl Serialize for LogId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base64())
    }
}

impl<'de> Deserialize<'de> for LogId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        LogId::from_base64(&s).map_err(serde::de::Error::custom)
    }
}
