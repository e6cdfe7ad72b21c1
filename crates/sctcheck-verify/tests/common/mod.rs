//! Shared fixtures: throwaway logs, a small PKI and SCTs signed over leaves
//! built by the code under test.

#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use const_oid::db::rfc5280::ID_CE_SUBJECT_KEY_IDENTIFIER;
use const_oid::db::rfc5912::ECDSA_WITH_SHA_256;
use const_oid::db::rfc6962::{CT_PRECERT_POISON, CT_PRECERT_SCTS};
use sctcheck_crypto::KeyPair;
use sctcheck_loglist::{Log, LogRegistry};
use sctcheck_types::{DerPublicKey, LogId, Sha256Hash};
use sctcheck_verify::{
    algorithm_for_scheme, encode_sct_list, CertificateChain, CertificateDer, DigitallySigned,
    InclusionEvidence, LogEntryType, MerkleLeafBuilder, MerkleTreeLeaf, SerializedSct,
    SignedCertificateTimestamp, SignedTreeHead,
};
use std::str::FromStr;
use x509_cert::{
    der::{
        asn1::{BitString, OctetString, UtcTime},
        Decode, Encode,
    },
    ext::Extension,
    name::Name,
    serial_number::SerialNumber,
    spki::{AlgorithmIdentifierOwned, SubjectPublicKeyInfoOwned},
    time::{Time, Validity},
    Certificate, TbsCertificate, Version,
};

/// 2025-06-01T00:00:00Z, the timestamp most fixtures are issued at
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
}

pub fn millis(time: DateTime<Utc>) -> u64 {
    time.timestamp_millis() as u64
}

/// A log whose private key the test holds
pub struct TestLog {
    pub key_pair: KeyPair,
    pub log: Log,
}

impl TestLog {
    pub fn new(description: &str) -> Self {
        Self::with_mmd(description, Duration::hours(24))
    }

    pub fn with_mmd(description: &str, mmd: Duration) -> Self {
        Self::with_key_pair(description, KeyPair::generate_ecdsa_p256().unwrap(), mmd)
    }

    pub fn with_key_pair(description: &str, key_pair: KeyPair, mmd: Duration) -> Self {
        let key = DerPublicKey::new(key_pair.public_key_to_der().unwrap());
        let log = Log::new(description, key, mmd).unwrap();
        Self { key_pair, log }
    }

    pub fn id(&self) -> LogId {
        self.log.id
    }

    /// Issue an SCT over `leaf` at `timestamp`
    pub fn sign_sct(&self, leaf: &MerkleTreeLeaf, timestamp: u64) -> SerializedSct {
        let signed = leaf.with_sct_fields(timestamp, &[]);
        let signature = self.key_pair.sign(&signed.to_bytes().unwrap()).unwrap();
        SignedCertificateTimestamp {
            version: 0,
            log_id: self.id(),
            timestamp,
            extensions: vec![],
            signature: DigitallySigned {
                algorithm: algorithm_for_scheme(self.key_pair.scheme()),
                signature: signature.into_bytes(),
            },
        }
        .encode()
        .unwrap()
    }

    /// Issue an SCT for the chain's leaf as delivered in a handshake or OCSP response
    pub fn sign_chain_sct(&self, chain: &CertificateChain, timestamp: u64) -> SerializedSct {
        let leaf = MerkleLeafBuilder::build_from_chain(chain, LogEntryType::X509Entry, 0).unwrap();
        self.sign_sct(&leaf, timestamp)
    }

    /// A one-leaf tree head containing `leaf`, with its (empty) audit path
    pub fn single_leaf_proof(&self, leaf_hash: Sha256Hash, timestamp: u64) -> InclusionEvidence {
        let mut tree_head = SignedTreeHead {
            tree_size: 1,
            timestamp,
            sha256_root_hash: leaf_hash,
            tree_head_signature: vec![],
        };
        let signature = self
            .key_pair
            .sign(&tree_head.signed_data().unwrap())
            .unwrap();
        tree_head.tree_head_signature = DigitallySigned {
            algorithm: algorithm_for_scheme(self.key_pair.scheme()),
            signature: signature.into_bytes(),
        }
        .encode()
        .unwrap();

        InclusionEvidence {
            tree_head,
            leaf_index: 0,
            audit_path: vec![],
        }
    }
}

pub fn registry(logs: &[&TestLog]) -> LogRegistry {
    LogRegistry::from_logs(logs.iter().map(|l| l.log.clone())).unwrap()
}

/// Flip one bit in the signature of an encoded SCT
pub fn flip_signature_bit(sct: &SerializedSct) -> SerializedSct {
    let mut bytes = sct.as_bytes().to_vec();
    let last = bytes.len() - 1;
    bytes[last] ^= 0x01;
    SerializedSct::new(bytes)
}

fn validity() -> Validity {
    let from = std::time::Duration::from_secs(t0().timestamp() as u64 - 86_400);
    let until = from + std::time::Duration::from_secs(90 * 86_400);
    Validity {
        not_before: Time::UtcTime(UtcTime::from_unix_duration(from).unwrap()),
        not_after: Time::UtcTime(UtcTime::from_unix_duration(until).unwrap()),
    }
}

fn certificate(
    serial: u8,
    subject: &str,
    issuer: &str,
    key: &KeyPair,
    extensions: Vec<Extension>,
) -> CertificateDer<'static> {
    let algorithm = AlgorithmIdentifierOwned {
        oid: ECDSA_WITH_SHA_256,
        parameters: None,
    };
    let tbs = TbsCertificate {
        version: Version::V3,
        serial_number: SerialNumber::new(&[serial]).unwrap(),
        signature: algorithm.clone(),
        issuer: Name::from_str(issuer).unwrap(),
        validity: validity(),
        subject: Name::from_str(subject).unwrap(),
        subject_public_key_info: SubjectPublicKeyInfoOwned::from_der(
            &key.public_key_to_der().unwrap(),
        )
        .unwrap(),
        issuer_unique_id: None,
        subject_unique_id: None,
        extensions: Some(extensions),
    };

    // Certificate signatures are not checked here, any bits will do
    let cert = Certificate {
        tbs_certificate: tbs,
        signature_algorithm: algorithm,
        signature: BitString::from_bytes(&[0x00]).unwrap(),
    };
    CertificateDer::from(cert.to_der().unwrap())
}

fn subject_key_id(serial: u8) -> Extension {
    Extension {
        extn_id: ID_CE_SUBJECT_KEY_IDENTIFIER,
        critical: false,
        extn_value: OctetString::new(OctetString::new(vec![serial; 20]).unwrap().to_der().unwrap())
            .unwrap(),
    }
}

/// An issuing CA and a fresh leaf key
pub struct TestPki {
    pub issuer_key: KeyPair,
    pub leaf_key: KeyPair,
    pub issuer: CertificateDer<'static>,
}

impl TestPki {
    pub fn new() -> Self {
        let issuer_key = KeyPair::generate_ecdsa_p256().unwrap();
        let leaf_key = KeyPair::generate_ecdsa_p256().unwrap();
        let issuer = certificate(
            1,
            "CN=Test Issuing CA,O=Test CA",
            "CN=Test Issuing CA,O=Test CA",
            &issuer_key,
            vec![subject_key_id(1)],
        );
        Self {
            issuer_key,
            leaf_key,
            issuer,
        }
    }

    /// A leaf without SCTs
    pub fn leaf(&self) -> CertificateDer<'static> {
        self.leaf_with(vec![subject_key_id(2)])
    }

    pub fn leaf_with(&self, extensions: Vec<Extension>) -> CertificateDer<'static> {
        certificate(
            2,
            "CN=www.example.com,O=Example",
            "CN=Test Issuing CA,O=Test CA",
            &self.leaf_key,
            extensions,
        )
    }

    /// A poisoned precertificate
    pub fn precert(&self) -> CertificateDer<'static> {
        self.leaf_with(vec![
            subject_key_id(2),
            Extension {
                extn_id: CT_PRECERT_POISON,
                critical: true,
                extn_value: OctetString::new(vec![0x05, 0x00]).unwrap(),
            },
        ])
    }

    /// A leaf carrying SCTs for `issued`, each signed over the precertificate
    pub fn leaf_with_embedded(&self, issued: &[(&TestLog, u64)]) -> CertificateDer<'static> {
        let without_scts = self.leaf();
        let precert_leaf =
            MerkleLeafBuilder::build_for_embedded_sct(&without_scts, &self.issuer).unwrap();
        let scts: Vec<SerializedSct> = issued
            .iter()
            .map(|(log, timestamp)| log.sign_sct(&precert_leaf, *timestamp))
            .collect();
        self.leaf_with_sct_extension(&scts)
    }

    /// A leaf whose SCT list extension holds exactly `scts`
    pub fn leaf_with_sct_extension(&self, scts: &[SerializedSct]) -> CertificateDer<'static> {
        let list = encode_sct_list(scts).unwrap();
        let value = OctetString::new(list).unwrap().to_der().unwrap();
        self.leaf_with(vec![
            subject_key_id(2),
            Extension {
                extn_id: CT_PRECERT_SCTS,
                critical: false,
                extn_value: OctetString::new(value).unwrap(),
            },
        ])
    }

    pub fn chain(&self, leaf: CertificateDer<'static>) -> CertificateChain {
        CertificateChain::new(vec![leaf, self.issuer.clone()])
    }
}
