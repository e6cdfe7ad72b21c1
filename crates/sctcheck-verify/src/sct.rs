//! Signed Certificate Timestamps and SCT lists (RFC 6962 section 3.2-3.3)

use crate::error::{Error, Result};
use const_oid::db::rfc6962::CT_PRECERT_SCTS;
use rustls_pki_types::CertificateDer;
use sctcheck_crypto::SigningScheme;
use sctcheck_types::LogId;
use tls_codec::{
    DeserializeBytes, SerializeBytes, TlsByteVecU16, TlsDeserializeBytes, TlsSerializeBytes,
    TlsSize,
};
use x509_cert::{
    der::{asn1::OctetString, Decode},
    Certificate,
};

// TLS SignatureAndHashAlgorithm values (RFC 5246 section 7.4.1.4.1)
const ECDSA_SHA256: u16 = 0x0403;
const ECDSA_SHA384: u16 = 0x0503;
const RSA_PKCS1_SHA256: u16 = 0x0401;
const RSA_PKCS1_SHA384: u16 = 0x0501;
const RSA_PKCS1_SHA512: u16 = 0x0601;

/// The only SCT version defined by RFC 6962
pub const SCT_VERSION_V1: u8 = 0;

/// An SCT exactly as it arrived from an evidence source
///
/// Nothing has been checked yet. Decoding happens inside verification so a
/// malformed blob becomes a per-SCT verdict instead of aborting the source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SerializedSct(Vec<u8>);

impl SerializedSct {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Decode into a structured timestamp
    pub fn decode(&self) -> Result<SignedCertificateTimestamp> {
        SignedCertificateTimestamp::decode(&self.0)
    }
}

impl From<Vec<u8>> for SerializedSct {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for SerializedSct {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl AsRef<[u8]> for SerializedSct {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[derive(Debug, TlsSerializeBytes, TlsDeserializeBytes, TlsSize)]
struct DigitallySignedWire {
    hash_algorithm: u8,
    signature_algorithm: u8,
    signature: TlsByteVecU16,
}

#[derive(Debug, TlsSerializeBytes, TlsDeserializeBytes, TlsSize)]
struct SctWire {
    version: u8,
    log_id: [u8; 32],
    timestamp: u64,
    extensions: TlsByteVecU16,
    signature: DigitallySignedWire,
}

/// A log's signature together with its TLS algorithm identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitallySigned {
    /// `(hash << 8) | signature` as in TLS 1.2
    pub algorithm: u16,
    pub signature: Vec<u8>,
}

impl DigitallySigned {
    /// Decode a standalone TLS `DigitallySigned` (as in a tree head signature)
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let (wire, rest) = DigitallySignedWire::tls_deserialize_bytes(bytes)
            .map_err(|e| Error::Encoding(format!("failed to decode signature: {}", e)))?;
        if !rest.is_empty() {
            return Err(Error::Encoding(format!(
                "{} trailing bytes after signature",
                rest.len()
            )));
        }
        Ok(wire.into())
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        DigitallySignedWire::from(self)
            .tls_serialize()
            .map_err(|e| Error::Encoding(format!("failed to encode signature: {}", e)))
    }

    /// Signing scheme named by the algorithm identifier
    pub fn scheme(&self) -> Result<SigningScheme> {
        scheme_for_algorithm(self.algorithm)
    }
}

impl From<DigitallySignedWire> for DigitallySigned {
    fn from(wire: DigitallySignedWire) -> Self {
        Self {
            algorithm: u16::from_be_bytes([wire.hash_algorithm, wire.signature_algorithm]),
            signature: wire.signature.as_slice().to_vec(),
        }
    }
}

impl From<&DigitallySigned> for DigitallySignedWire {
    fn from(signed: &DigitallySigned) -> Self {
        let [hash_algorithm, signature_algorithm] = signed.algorithm.to_be_bytes();
        Self {
            hash_algorithm,
            signature_algorithm,
            signature: signed.signature.as_slice().into(),
        }
    }
}

/// A decoded SCT
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedCertificateTimestamp {
    pub version: u8,
    pub log_id: LogId,
    /// Milliseconds since the Unix epoch
    pub timestamp: u64,
    pub extensions: Vec<u8>,
    pub signature: DigitallySigned,
}

impl SignedCertificateTimestamp {
    /// Decode an SCT from its TLS encoding
    ///
    /// Only v1 is accepted and the whole input must be consumed.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let (wire, rest) = SctWire::tls_deserialize_bytes(bytes)
            .map_err(|e| Error::MalformedSct(format!("failed to decode SCT: {}", e)))?;

        if !rest.is_empty() {
            return Err(Error::MalformedSct(format!(
                "{} trailing bytes after SCT",
                rest.len()
            )));
        }
        if wire.version != SCT_VERSION_V1 {
            return Err(Error::MalformedSct(format!(
                "unsupported SCT version {}",
                wire.version
            )));
        }

        Ok(Self {
            version: wire.version,
            log_id: LogId::new(wire.log_id),
            timestamp: wire.timestamp,
            extensions: wire.extensions.as_slice().to_vec(),
            signature: wire.signature.into(),
        })
    }

    /// Encode back into the TLS wire format
    pub fn encode(&self) -> Result<SerializedSct> {
        let wire = SctWire {
            version: self.version,
            log_id: *self.log_id.as_bytes(),
            timestamp: self.timestamp,
            extensions: self.extensions.as_slice().into(),
            signature: DigitallySignedWire::from(&self.signature),
        };

        wire.tls_serialize()
            .map(SerializedSct)
            .map_err(|e| Error::Encoding(format!("failed to encode SCT: {}", e)))
    }
}

/// Map a TLS SignatureAndHashAlgorithm value to a signing scheme
pub fn scheme_for_algorithm(algorithm: u16) -> Result<SigningScheme> {
    match algorithm {
        ECDSA_SHA256 => Ok(SigningScheme::EcdsaP256Sha256),
        ECDSA_SHA384 => Ok(SigningScheme::EcdsaP384Sha384),
        RSA_PKCS1_SHA256 => Ok(SigningScheme::RsaPkcs1Sha256),
        RSA_PKCS1_SHA384 => Ok(SigningScheme::RsaPkcs1Sha384),
        RSA_PKCS1_SHA512 => Ok(SigningScheme::RsaPkcs1Sha512),
        other => Err(Error::MalformedSct(format!(
            "unsupported SCT signature algorithm: 0x{:04x}",
            other
        ))),
    }
}

/// The TLS SignatureAndHashAlgorithm value for a signing scheme
pub fn algorithm_for_scheme(scheme: SigningScheme) -> u16 {
    match scheme {
        SigningScheme::EcdsaP256Sha256 => ECDSA_SHA256,
        SigningScheme::EcdsaP384Sha384 => ECDSA_SHA384,
        SigningScheme::RsaPkcs1Sha256 => RSA_PKCS1_SHA256,
        SigningScheme::RsaPkcs1Sha384 => RSA_PKCS1_SHA384,
        SigningScheme::RsaPkcs1Sha512 => RSA_PKCS1_SHA512,
    }
}

/// Whether a signature made with `signed` can come from a log keyed for `log`
///
/// ECDSA signatures must use the curve and hash of the log key. An RSA key
/// may sign with any of the PKCS#1 digests.
pub(crate) fn scheme_matches_log(signed: SigningScheme, log: SigningScheme) -> bool {
    if log.is_rsa() {
        signed.is_rsa()
    } else {
        signed == log
    }
}

/// Split a `SignedCertificateTimestampList` into its serialized SCTs
///
/// The items are not decoded; see [`SerializedSct::decode`].
pub fn parse_sct_list(bytes: &[u8]) -> Result<Vec<SerializedSct>> {
    let (list, rest) = TlsByteVecU16::tls_deserialize_bytes(bytes)
        .map_err(|e| Error::MalformedSctList(format!("failed to decode list: {}", e)))?;
    if !rest.is_empty() {
        return Err(Error::MalformedSctList(format!(
            "{} trailing bytes after SCT list",
            rest.len()
        )));
    }

    let mut remaining = list.as_slice();
    let mut scts = Vec::new();
    while !remaining.is_empty() {
        let (item, rest) = TlsByteVecU16::tls_deserialize_bytes(remaining)
            .map_err(|e| Error::MalformedSctList(format!("failed to decode entry: {}", e)))?;
        if item.as_slice().is_empty() {
            return Err(Error::MalformedSctList("empty SCT entry".to_string()));
        }
        scts.push(SerializedSct(item.as_slice().to_vec()));
        remaining = rest;
    }

    Ok(scts)
}

/// Encode serialized SCTs as a `SignedCertificateTimestampList`
pub fn encode_sct_list<'a>(scts: impl IntoIterator<Item = &'a SerializedSct>) -> Result<Vec<u8>> {
    let mut inner = Vec::new();
    for sct in scts {
        let item = TlsByteVecU16::from(sct.as_bytes());
        inner.extend(
            item.tls_serialize()
                .map_err(|e| Error::Encoding(format!("failed to encode SCT entry: {}", e)))?,
        );
    }

    TlsByteVecU16::from(inner.as_slice())
        .tls_serialize()
        .map_err(|e| Error::Encoding(format!("failed to encode SCT list: {}", e)))
}

/// SCTs embedded in a certificate's SCT list extension
///
/// A certificate without the extension yields an empty list.
pub fn embedded_scts(cert: &CertificateDer<'_>) -> Result<Vec<SerializedSct>> {
    let cert = Certificate::from_der(cert.as_ref())
        .map_err(|e| Error::Certificate(format!("failed to parse certificate: {}", e)))?;

    let Some(ext) = cert
        .tbs_certificate
        .extensions
        .iter()
        .flatten()
        .find(|ext| ext.extn_id == CT_PRECERT_SCTS)
    else {
        return Ok(Vec::new());
    };

    // extnValue wraps a DER OCTET STRING holding the TLS list
    let inner = OctetString::from_der(ext.extn_value.as_bytes())
        .map_err(|e| Error::MalformedSctList(format!("bad extension value: {}", e)))?;
    parse_sct_list(inner.as_bytes())
}
