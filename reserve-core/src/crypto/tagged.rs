use sha2::{Digest as _, Sha256};

use super::Digest;
use crate::constants::{TAG_BITCOIN_TRANSACTION, TAG_RESERVE_BRANCH, TAG_RESERVE_LEAF};

/// BIP340-style tagged hash: `SHA256(SHA256(tag) || SHA256(tag) || message)`.
///
/// The same message hashed under two different tags yields unrelated digests.
pub fn tagged_hash(tag: &str, message: &[u8]) -> Digest {
    let tag_hash = Sha256::digest(tag.as_bytes());

    let mut hasher = Sha256::new();
    hasher.update(&tag_hash);
    hasher.update(&tag_hash);
    hasher.update(message);
    hasher.finalize().into()
}

pub fn hash_bitcoin_transaction(message: &[u8]) -> Digest {
    tagged_hash(TAG_BITCOIN_TRANSACTION, message)
}

pub fn hash_reserve_leaf(message: &[u8]) -> Digest {
    tagged_hash(TAG_RESERVE_LEAF, message)
}

pub fn hash_reserve_branch(message: &[u8]) -> Digest {
    tagged_hash(TAG_RESERVE_BRANCH, message)
}
