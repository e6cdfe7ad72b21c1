//! Peer certificate chains

use crate::error::{Error, Result};
use rustls_pki_types::CertificateDer;

/// A peer-presented certificate chain, leaf first
///
/// The chain is taken as presented; no path building or trust anchor
/// validation happens here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CertificateChain {
    certs: Vec<CertificateDer<'static>>,
}

impl CertificateChain {
    pub fn new(certs: Vec<CertificateDer<'static>>) -> Self {
        Self { certs }
    }

    /// Build a chain from DER certificates
    pub fn from_der<I, B>(certs: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<Vec<u8>>,
    {
        Self {
            certs: certs
                .into_iter()
                .map(|der| CertificateDer::from(der.into()))
                .collect(),
        }
    }

    /// Parse every `CERTIFICATE` block of a PEM bundle, in order
    pub fn from_pem(pem_data: &str) -> Result<Self> {
        let blocks = pem::parse_many(pem_data)
            .map_err(|e| Error::Certificate(format!("failed to parse PEM: {}", e)))?;

        let certs = blocks
            .into_iter()
            .filter(|block| block.tag() == "CERTIFICATE")
            .map(|block| CertificateDer::from(block.into_contents()))
            .collect();

        Ok(Self { certs })
    }

    pub fn leaf(&self) -> Option<&CertificateDer<'static>> {
        self.certs.first()
    }

    /// The certificate that issued the leaf
    pub fn issuer(&self) -> Option<&CertificateDer<'static>> {
        self.certs.get(1)
    }

    pub fn len(&self) -> usize {
        self.certs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.certs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CertificateDer<'static>> {
        self.certs.iter()
    }
}

impl From<Vec<CertificateDer<'static>>> for CertificateChain {
    fn from(certs: Vec<CertificateDer<'static>>) -> Self {
        Self::new(certs)
    }
}
