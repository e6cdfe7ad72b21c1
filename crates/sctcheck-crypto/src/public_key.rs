//! SubjectPublicKeyInfo inspection
//!
//! CT log lists publish each log key as a DER SubjectPublicKeyInfo. The
//! algorithm OID (and curve, for EC keys) fixes the scheme the log signs with.

use crate::error::{Error, Result};
use crate::SigningScheme;
use const_oid::db::rfc5912::{ID_EC_PUBLIC_KEY, RSA_ENCRYPTION, SECP_256_R_1, SECP_384_R_1};
use const_oid::ObjectIdentifier;
use der::Decode;
use spki::SubjectPublicKeyInfoOwned;

/// Determine the signing scheme from a parsed SubjectPublicKeyInfo
///
/// RSA keys map to PKCS#1 v1.5 with SHA-256, the only RSA variant RFC 6962
/// allows for logs.
pub fn signing_scheme_for_spki(spki: &SubjectPublicKeyInfoOwned) -> Result<SigningScheme> {
    let alg_oid = spki.algorithm.oid;

    if alg_oid == RSA_ENCRYPTION {
        return Ok(SigningScheme::RsaPkcs1Sha256);
    }

    if alg_oid != ID_EC_PUBLIC_KEY {
        return Err(Error::UnsupportedKey(format!(
            "public key algorithm {}",
            alg_oid
        )));
    }

    let params = spki
        .algorithm
        .parameters
        .as_ref()
        .ok_or_else(|| Error::MalformedKey("EC key missing curve parameters".to_string()))?;

    // params.value() holds the raw OID content bytes
    let curve_oid = ObjectIdentifier::from_bytes(params.value())
        .map_err(|e| Error::MalformedKey(format!("failed to parse EC curve OID: {}", e)))?;

    if curve_oid == SECP_256_R_1 {
        Ok(SigningScheme::EcdsaP256Sha256)
    } else if curve_oid == SECP_384_R_1 {
        Ok(SigningScheme::EcdsaP384Sha384)
    } else {
        tracing::warn!("unsupported EC curve OID: {}", curve_oid);
        Err(Error::UnsupportedKey(format!("EC curve {}", curve_oid)))
    }
}

/// Determine the signing scheme from DER-encoded SubjectPublicKeyInfo bytes
pub fn signing_scheme_for_spki_der(spki_der: &[u8]) -> Result<SigningScheme> {
    let spki = SubjectPublicKeyInfoOwned::from_der(spki_der)
        .map_err(|e| Error::MalformedKey(format!("failed to parse SPKI: {}", e)))?;
    signing_scheme_for_spki(&spki)
}
