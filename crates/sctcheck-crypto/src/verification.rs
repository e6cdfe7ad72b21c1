//! Signature verification using aws-lc-rs

use crate::error::{Error, Result};
use crate::signing::SigningScheme;
use aws_lc_rs::signature::{self, UnparsedPublicKey, VerificationAlgorithm};

fn verification_algorithm(scheme: SigningScheme) -> &'static dyn VerificationAlgorithm {
    match scheme {
        SigningScheme::EcdsaP256Sha256 => &signature::ECDSA_P256_SHA256_ASN1,
        SigningScheme::EcdsaP384Sha384 => &signature::ECDSA_P384_SHA384_ASN1,
        SigningScheme::RsaPkcs1Sha256 => &signature::RSA_PKCS1_2048_8192_SHA256,
        SigningScheme::RsaPkcs1Sha384 => &signature::RSA_PKCS1_2048_8192_SHA384,
        SigningScheme::RsaPkcs1Sha512 => &signature::RSA_PKCS1_2048_8192_SHA512,
    }
}

/// A log public key paired with the scheme to check signatures under
///
/// `spki` is the DER SubjectPublicKeyInfo, which is what log lists publish
/// and what the log identifier is computed over.
#[derive(Debug, Clone)]
pub struct VerificationKey {
    pub spki: Vec<u8>,
    pub scheme: SigningScheme,
}

impl VerificationKey {
    pub fn new(spki: Vec<u8>, scheme: SigningScheme) -> Self {
        Self { spki, scheme }
    }

    pub fn verify(&self, data: &[u8], signature: &[u8]) -> Result<()> {
        UnparsedPublicKey::new(verification_algorithm(self.scheme), &self.spki)
            .verify(data, signature)
            .map_err(|_| Error::BadSignature {
                scheme: self.scheme,
            })
    }
}
