use aws_lc_rs::digest::{digest, SHA256};
use sctcheck_types::Sha256Hash;

/// SHA-256 of `data`
///
/// Used for log identifiers (hash of the DER key) and precertificate issuer
/// key hashes.
pub fn sha256(data: &[u8]) -> Sha256Hash {
    let mut out = [0u8; 32];
    out.copy_from_slice(digest(&SHA256, data).as_ref());
    Sha256Hash::from_bytes(out)
}
