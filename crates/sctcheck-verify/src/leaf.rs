//! Canonical Merkle tree leaves (RFC 6962 section 3.4)
//!
//! A leaf is the exact byte sequence a log signs when it issues an SCT and
//! later hashes into its tree. Everything here is a pure function of its
//! inputs: the same chain and SCT always encode to the same bytes.

use crate::chain::CertificateChain;
use crate::error::{Error, Result};
use const_oid::db::rfc6962::{CT_PRECERT_POISON, CT_PRECERT_SCTS};
use const_oid::ObjectIdentifier;
use rustls_pki_types::CertificateDer;
use sctcheck_crypto::sha256;
use sctcheck_types::Sha256Hash;
use tls_codec::{SerializeBytes, TlsByteVecU16, TlsByteVecU24, TlsSerializeBytes, TlsSize};
use x509_cert::{
    der::{Decode, Encode},
    Certificate,
};

/// `Version` of RFC 6962
const LEAF_VERSION_V1: u8 = 0;

/// `certificate_timestamp` signature type, which shares its value with the
/// `timestamped_entry` leaf type
const TIMESTAMPED_ENTRY: u8 = 0;

/// LogEntryType as defined in RFC 6962
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum LogEntryType {
    /// An ordinary certificate
    X509Entry = 0,
    /// A precertificate
    PrecertEntry = 1,
}

/// PreCert structure for precertificate entries
#[derive(Debug, Clone, PartialEq, Eq, TlsSerializeBytes, TlsSize)]
struct PreCert {
    /// SHA-256 hash of the issuer's SubjectPublicKeyInfo
    issuer_key_hash: [u8; 32],
    /// The TBSCertificate with the poison or SCT extension removed
    tbs_certificate: TlsByteVecU24,
}

#[derive(Debug, Clone, PartialEq, Eq, TlsSerializeBytes, TlsSize)]
#[repr(u16)]
enum SignedEntry {
    #[tls_codec(discriminant = "LogEntryType::X509Entry")]
    X509Entry(TlsByteVecU24),
    #[tls_codec(discriminant = "LogEntryType::PrecertEntry")]
    PrecertEntry(PreCert),
}

/// A `MerkleTreeLeaf` with a `TimestampedEntry`
///
/// The same layout is the `digitally-signed` input of an SCT, so one value
/// serves both signature verification and leaf hashing.
#[derive(Debug, Clone, PartialEq, Eq, TlsSerializeBytes, TlsSize)]
pub struct MerkleTreeLeaf {
    version: u8,
    leaf_type: u8,
    timestamp: u64,
    signed_entry: SignedEntry,
    extensions: TlsByteVecU16,
}

impl MerkleTreeLeaf {
    fn new(timestamp: u64, signed_entry: SignedEntry) -> Self {
        Self {
            version: LEAF_VERSION_V1,
            leaf_type: TIMESTAMPED_ENTRY,
            timestamp,
            signed_entry,
            extensions: TlsByteVecU16::new(Vec::new()),
        }
    }

    pub fn entry_type(&self) -> LogEntryType {
        match self.signed_entry {
            SignedEntry::X509Entry(_) => LogEntryType::X509Entry,
            SignedEntry::PrecertEntry(_) => LogEntryType::PrecertEntry,
        }
    }

    /// Timestamp in milliseconds since the Unix epoch
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    pub fn extensions(&self) -> &[u8] {
        self.extensions.as_slice()
    }

    /// SHA-256 of the issuer key, for precertificate entries
    pub fn issuer_key_hash(&self) -> Option<&[u8; 32]> {
        match &self.signed_entry {
            SignedEntry::X509Entry(_) => None,
            SignedEntry::PrecertEntry(precert) => Some(&precert.issuer_key_hash),
        }
    }

    /// The same entry stamped with an SCT's timestamp and extensions
    ///
    /// An SCT signs over its own timestamp and extensions, so a leaf built
    /// once per source is specialised per SCT with this.
    pub fn with_sct_fields(&self, timestamp: u64, extensions: &[u8]) -> Self {
        Self {
            timestamp,
            extensions: extensions.into(),
            ..self.clone()
        }
    }

    /// The TLS encoding of this leaf
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        self.tls_serialize()
            .map_err(|e| Error::Encoding(format!("failed to serialize Merkle leaf: {}", e)))
    }

    /// `SHA-256(0x00 || leaf)`, the value the log stores in its tree
    pub fn leaf_hash(&self) -> Result<Sha256Hash> {
        Ok(sctcheck_merkle::hash_leaf(&self.to_bytes()?))
    }
}

/// Builds the leaf a log would have signed for a given piece of evidence
pub struct MerkleLeafBuilder;

impl MerkleLeafBuilder {
    /// Build a leaf for SCTs delivered out of band (TLS handshake or OCSP)
    ///
    /// For [`LogEntryType::X509Entry`] the entry is the leaf certificate as
    /// presented. For [`LogEntryType::PrecertEntry`] the leaf is taken to be a
    /// poisoned precertificate issued directly by `chain[1]`; the poison
    /// extension is removed from its TBS.
    pub fn build_from_chain(
        chain: &CertificateChain,
        entry_type: LogEntryType,
        timestamp: u64,
    ) -> Result<MerkleTreeLeaf> {
        let leaf = chain
            .leaf()
            .ok_or_else(|| Error::ChainBuild("certificate chain is empty".to_string()))?;

        let signed_entry = match entry_type {
            LogEntryType::X509Entry => SignedEntry::X509Entry(leaf.as_ref().into()),
            LogEntryType::PrecertEntry => {
                let issuer = chain.issuer().ok_or_else(|| {
                    Error::ChainBuild("precertificate entry needs an issuer".to_string())
                })?;
                SignedEntry::PrecertEntry(precert_entry(leaf, issuer, CT_PRECERT_POISON)?)
            }
        };

        Ok(MerkleTreeLeaf::new(timestamp, signed_entry))
    }

    /// Build the precertificate leaf for SCTs embedded in `leaf`
    ///
    /// The SCT list extension is removed from the leaf's TBS, reconstructing
    /// what the log saw at submission time. The timestamp is left at zero;
    /// see [`MerkleTreeLeaf::with_sct_fields`].
    pub fn build_for_embedded_sct(
        leaf: &CertificateDer<'_>,
        issuer: &CertificateDer<'_>,
    ) -> Result<MerkleTreeLeaf> {
        let precert = precert_entry(leaf, issuer, CT_PRECERT_SCTS)?;
        Ok(MerkleTreeLeaf::new(0, SignedEntry::PrecertEntry(precert)))
    }
}

fn precert_entry(
    leaf: &CertificateDer<'_>,
    issuer: &CertificateDer<'_>,
    strip: ObjectIdentifier,
) -> Result<PreCert> {
    let cert = Certificate::from_der(leaf.as_ref())
        .map_err(|e| Error::ChainBuild(format!("failed to parse leaf certificate: {}", e)))?;
    let issuer = Certificate::from_der(issuer.as_ref())
        .map_err(|e| Error::ChainBuild(format!("failed to parse issuer certificate: {}", e)))?;

    let mut tbs = cert.tbs_certificate;
    tbs.extensions = tbs.extensions.and_then(|exts| {
        let kept: Vec<_> = exts.into_iter().filter(|ext| ext.extn_id != strip).collect();
        (!kept.is_empty()).then_some(kept)
    });

    let tbs_der = tbs
        .to_der()
        .map_err(|e| Error::ChainBuild(format!("failed to encode precert TBS: {}", e)))?;
    let issuer_spki_der = issuer
        .tbs_certificate
        .subject_public_key_info
        .to_der()
        .map_err(|e| Error::ChainBuild(format!("failed to encode issuer key: {}", e)))?;

    Ok(PreCert {
        issuer_key_hash: *sha256(&issuer_spki_der).as_bytes(),
        tbs_certificate: tbs_der.as_slice().into(),
    })
}
