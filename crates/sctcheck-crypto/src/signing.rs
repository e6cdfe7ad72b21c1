//! Signature schemes and log key generation
//!
//! CT logs sign with ECDSA or RSA PKCS#1 v1.5. Key generation exists to stand
//! up a log for tests and tooling.

use crate::error::{Error, Result};
use aws_lc_rs::rand::SystemRandom;
use aws_lc_rs::rsa::KeySize;
use aws_lc_rs::signature::{
    EcdsaKeyPair, EcdsaSigningAlgorithm, KeyPair as _, RsaKeyPair,
    ECDSA_P256_SHA256_ASN1_SIGNING, ECDSA_P384_SHA384_ASN1_SIGNING, RSA_PKCS1_SHA256,
};
use const_oid::db::rfc5912::{ID_EC_PUBLIC_KEY, RSA_ENCRYPTION, SECP_256_R_1, SECP_384_R_1};
use der::asn1::{BitString, Null};
use der::{Any, Encode};
use spki::{AlgorithmIdentifierOwned, SubjectPublicKeyInfoOwned};

/// Signature schemes a CT log may sign with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SigningScheme {
    EcdsaP256Sha256,
    EcdsaP384Sha384,
    RsaPkcs1Sha256,
    RsaPkcs1Sha384,
    RsaPkcs1Sha512,
}

impl SigningScheme {
    pub fn name(&self) -> &'static str {
        match self {
            SigningScheme::EcdsaP256Sha256 => "ECDSA_P256_SHA256",
            SigningScheme::EcdsaP384Sha384 => "ECDSA_P384_SHA384",
            SigningScheme::RsaPkcs1Sha256 => "RSA_PKCS1_SHA256",
            SigningScheme::RsaPkcs1Sha384 => "RSA_PKCS1_SHA384",
            SigningScheme::RsaPkcs1Sha512 => "RSA_PKCS1_SHA512",
        }
    }

    /// Whether this is one of the RSA PKCS#1 variants
    pub fn is_rsa(&self) -> bool {
        matches!(
            self,
            SigningScheme::RsaPkcs1Sha256
                | SigningScheme::RsaPkcs1Sha384
                | SigningScheme::RsaPkcs1Sha512
        )
    }
}

impl std::fmt::Display for SigningScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Signature bytes; DER `ECDSA-Sig-Value` for ECDSA keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature(Vec<u8>);

impl Signature {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

enum Signer {
    Ecdsa(EcdsaKeyPair),
    Rsa(RsaKeyPair),
}

/// A signing key, such as a log's private key
pub struct KeyPair {
    inner: Signer,
    scheme: SigningScheme,
}

impl KeyPair {
    /// Generate a P-256 key
    pub fn generate_ecdsa_p256() -> Result<Self> {
        Self::generate(
            &ECDSA_P256_SHA256_ASN1_SIGNING,
            SigningScheme::EcdsaP256Sha256,
        )
    }

    /// Generate a P-384 key
    pub fn generate_ecdsa_p384() -> Result<Self> {
        Self::generate(
            &ECDSA_P384_SHA384_ASN1_SIGNING,
            SigningScheme::EcdsaP384Sha384,
        )
    }

    /// Generate an RSA-2048 key signing with PKCS#1 v1.5 and SHA-256
    pub fn generate_rsa_2048() -> Result<Self> {
        let inner = RsaKeyPair::generate(KeySize::Rsa2048)
            .map_err(|_| Error::KeyGeneration("could not generate RSA-2048 key".to_string()))?;
        Ok(Self {
            inner: Signer::Rsa(inner),
            scheme: SigningScheme::RsaPkcs1Sha256,
        })
    }

    fn generate(alg: &'static EcdsaSigningAlgorithm, scheme: SigningScheme) -> Result<Self> {
        let pkcs8 = EcdsaKeyPair::generate_pkcs8(alg, &SystemRandom::new())
            .map_err(|_| Error::KeyGeneration(format!("could not generate {} key", scheme)))?;
        let inner = EcdsaKeyPair::from_pkcs8(alg, pkcs8.as_ref())?;
        Ok(Self {
            inner: Signer::Ecdsa(inner),
            scheme,
        })
    }

    pub fn scheme(&self) -> SigningScheme {
        self.scheme
    }

    /// Sign `data` with the key's scheme
    pub fn sign(&self, data: &[u8]) -> Result<Signature> {
        let rng = SystemRandom::new();
        let failed = |_| Error::Signing(format!("{} signing failed", self.scheme));
        let bytes = match &self.inner {
            Signer::Ecdsa(kp) => kp.sign(&rng, data).map_err(failed)?.as_ref().to_vec(),
            Signer::Rsa(kp) => {
                let mut sig = vec![0u8; kp.public_modulus_len()];
                kp.sign(&RSA_PKCS1_SHA256, &rng, data, &mut sig)
                    .map_err(failed)?;
                sig
            }
        };
        Ok(Signature(bytes))
    }

    /// The public key as DER SubjectPublicKeyInfo, the form log lists publish
    pub fn public_key_to_der(&self) -> Result<Vec<u8>> {
        let (algorithm, key): (AlgorithmIdentifierOwned, &[u8]) = match &self.inner {
            Signer::Ecdsa(kp) => {
                let curve = match self.scheme {
                    SigningScheme::EcdsaP384Sha384 => SECP_384_R_1,
                    _ => SECP_256_R_1,
                };
                let algorithm = AlgorithmIdentifierOwned {
                    oid: ID_EC_PUBLIC_KEY,
                    parameters: Some(Any::encode_from(&curve)?),
                };
                (algorithm, kp.public_key().as_ref())
            }
            // PKCS#1 RSAPublicKey inside an rsaEncryption SPKI
            Signer::Rsa(kp) => {
                let algorithm = AlgorithmIdentifierOwned {
                    oid: RSA_ENCRYPTION,
                    parameters: Some(Any::encode_from(&Null)?),
                };
                (algorithm, kp.public_key().as_ref())
            }
        };
        let spki = SubjectPublicKeyInfoOwned {
            algorithm,
            subject_public_key: BitString::from_bytes(key)?,
        };
        Ok(spki.to_der()?)
    }
}
