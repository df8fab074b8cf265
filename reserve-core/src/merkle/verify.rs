use super::proof::{MerkleProof, Side};
use super::scheme::HashScheme;
use super::Result;
use crate::crypto::encoding::{digest_from_hex, to_hex};
use crate::crypto::Digest;

impl MerkleProof {
    /// Replay the proof from its item up to a root digest.
    ///
    /// A sibling that is not 64 hex characters fails with an invalid-encoding
    /// error instead of producing a root.
    pub fn compute_root(&self, scheme: &HashScheme) -> Result<Digest> {
        let mut current = scheme.hash_leaf(self.item());

        for element in self.elements() {
            let sibling = digest_from_hex(&element.hash)?;
            current = match element.side {
                Side::Left => scheme.hash_branch(&sibling, &current),
                Side::Right => scheme.hash_branch(&current, &sibling),
            };
        }

        Ok(current)
    }

    pub fn verify(&self, expected_root_hex: &str, scheme: &HashScheme) -> Result<bool> {
        verify_proof(self, expected_root_hex, scheme)
    }
}

/// Check `proof` against `expected_root_hex` without access to any tree.
///
/// `Ok(false)` means the proof is well formed but does not reach the expected
/// root; an expected root that is not hex at all simply never matches.
/// `Err` is reserved for malformed sibling hashes.
pub fn verify_proof(proof: &MerkleProof, expected_root_hex: &str, scheme: &HashScheme) -> Result<bool> {
    let computed = to_hex(&proof.compute_root(scheme)?);
    let matches = computed == expected_root_hex.to_ascii_lowercase();

    tracing::debug!(elements = proof.len(), matches, "merkle proof verified");

    Ok(matches)
}

pub fn verify_proof_with_tags(
    proof: &MerkleProof,
    expected_root_hex: &str,
    leaf_tag: &str,
    branch_tag: &str,
) -> Result<bool> {
    verify_proof(proof, expected_root_hex, &HashScheme::new(leaf_tag, branch_tag))
}
