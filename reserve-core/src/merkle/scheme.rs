use serde::{Deserialize, Serialize};

use crate::constants::{TAG_BITCOIN_TRANSACTION, TAG_RESERVE_BRANCH, TAG_RESERVE_LEAF};
use crate::crypto::encoding::concat_bytes;
use crate::crypto::tagged::tagged_hash;
use crate::crypto::Digest;

/// The pair of tags a tree hashes with.
///
/// Chosen once when a tree is built and reused for every leaf and branch hash,
/// and handed to the verifier so it replays the same scheme.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HashScheme {
    leaf_tag: String,
    branch_tag: String,
}

impl HashScheme {
    pub fn new(leaf_tag: impl Into<String>, branch_tag: impl Into<String>) -> Self {
        Self {
            leaf_tag: leaf_tag.into(),
            branch_tag: branch_tag.into(),
        }
    }

    /// `Bitcoin_Transaction` for both leaves and branches.
    pub fn bitcoin() -> Self {
        Self::new(TAG_BITCOIN_TRANSACTION, TAG_BITCOIN_TRANSACTION)
    }

    /// `ProofOfReserve_Leaf` / `ProofOfReserve_Branch`.
    pub fn proof_of_reserve() -> Self {
        Self::new(TAG_RESERVE_LEAF, TAG_RESERVE_BRANCH)
    }

    pub fn leaf_tag(&self) -> &str {
        &self.leaf_tag
    }

    pub fn branch_tag(&self) -> &str {
        &self.branch_tag
    }

    pub fn hash_leaf(&self, item: &[u8]) -> Digest {
        tagged_hash(&self.leaf_tag, item)
    }

    /// Parent digest over `left || right`. The order is never swapped.
    pub fn hash_branch(&self, left: &Digest, right: &Digest) -> Digest {
        tagged_hash(&self.branch_tag, &concat_bytes(left, right))
    }
}

impl Default for HashScheme {
    fn default() -> Self {
        Self::bitcoin()
    }
}
