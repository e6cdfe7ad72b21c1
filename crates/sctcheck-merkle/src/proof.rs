//! Merkle inclusion proof verification
//!
//! The audit path check of RFC 6962 section 2.1.1 in the iterative form given
//! by RFC 9162 section 2.1.3.2, which also rejects paths of the wrong length.

use crate::error::{Error, Result};
use crate::tree::{hash_children, hash_leaf};
use sctcheck_types::Sha256Hash;

/// An audit path for one leaf of a tree of `tree_size` leaves
#[derive(Debug, Clone, Copy)]
pub struct InclusionProof<'a> {
    pub leaf_index: u64,
    pub tree_size: u64,
    /// Sibling hashes ordered from the leaf upwards
    pub audit_path: &'a [Sha256Hash],
}

impl InclusionProof<'_> {
    /// Recompute the tree root from a leaf hash and this path
    pub fn root_from(&self, leaf_hash: &Sha256Hash) -> Result<Sha256Hash> {
        if self.tree_size == 0 {
            return Err(Error::InvalidTreeSize("empty tree".to_string()));
        }
        if self.leaf_index >= self.tree_size {
            return Err(Error::InvalidLeafIndex(format!(
                "{} is outside a tree of {} leaves",
                self.leaf_index, self.tree_size
            )));
        }

        // node walks the leaf position upwards; last tracks the rightmost node
        let mut node = self.leaf_index;
        let mut last = self.tree_size - 1;
        let mut root = *leaf_hash;

        for sibling in self.audit_path {
            if last == 0 {
                return Err(Error::InvalidProof(format!(
                    "audit path of {} hashes is too long for leaf {} of {}",
                    self.audit_path.len(),
                    self.leaf_index,
                    self.tree_size
                )));
            }
            if node & 1 == 1 || node == last {
                root = hash_children(sibling, &root);
                // a right-edge node with no sibling is promoted unchanged
                while node & 1 == 0 && node != 0 {
                    node >>= 1;
                    last >>= 1;
                }
            } else {
                root = hash_children(&root, sibling);
            }
            node >>= 1;
            last >>= 1;
        }

        if last != 0 {
            return Err(Error::InvalidProof(format!(
                "audit path of {} hashes is too short for leaf {} of {}",
                self.audit_path.len(),
                self.leaf_index,
                self.tree_size
            )));
        }
        Ok(root)
    }

    /// Check that this path takes `leaf_hash` to `root`
    pub fn verify(&self, leaf_hash: &Sha256Hash, root: &Sha256Hash) -> Result<()> {
        let computed = self.root_from(leaf_hash)?;
        if &computed != root {
            return Err(Error::HashMismatch {
                expected: root.to_hex(),
                actual: computed.to_hex(),
            });
        }
        Ok(())
    }
}

/// Verify that `leaf_hash` sits at `leaf_index` of the tree with `root`
pub fn verify_inclusion_proof(
    leaf_hash: &Sha256Hash,
    leaf_index: u64,
    tree_size: u64,
    audit_path: &[Sha256Hash],
    root: &Sha256Hash,
) -> Result<()> {
    InclusionProof {
        leaf_index,
        tree_size,
        audit_path,
    }
    .verify(leaf_hash, root)
}

/// [`verify_inclusion_proof`] for raw leaf bytes and the base64 hashes an
/// RFC 6962 `get-proof-by-hash` / `get-sth` pair returns
pub fn verify_inclusion_proof_base64(
    leaf_data: &[u8],
    leaf_index: u64,
    tree_size: u64,
    audit_path_b64: &[String],
    root_b64: &str,
) -> Result<()> {
    let decode = |s: &str| {
        Sha256Hash::from_base64(s).map_err(|e| Error::InvalidProof(format!("bad hash: {}", e)))
    };
    let audit_path = audit_path_b64
        .iter()
        .map(|h| decode(h))
        .collect::<Result<Vec<_>>>()?;

    verify_inclusion_proof(
        &hash_leaf(leaf_data),
        leaf_index,
        tree_size,
        &audit_path,
        &decode(root_b64)?,
    )
}
