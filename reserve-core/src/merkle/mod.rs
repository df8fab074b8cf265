//! Tagged-hash Merkle tree with inclusion proofs.
//!
//! Leaves are `tagged_hash(leaf_tag, item)`, branches are
//! `tagged_hash(branch_tag, left || right)`. An odd node at any level is paired
//! with itself, so `[a, b, c]` and `[a, b, c, c]` commit to the same root.

pub mod scheme;
pub mod tree;
pub mod proof;
pub mod verify;

use thiserror::Error;

use crate::crypto::CryptoError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MerkleError {
    #[error("Data not found in the Merkle tree")]
    NotFound,

    #[error(transparent)]
    Crypto(#[from] CryptoError),
}

impl MerkleError {
    /// True when the error came from malformed hex rather than a missing item.
    pub fn is_invalid_encoding(&self) -> bool {
        matches!(self, MerkleError::Crypto(CryptoError::InvalidEncoding(_)))
    }
}

pub type Result<T> = std::result::Result<T, MerkleError>;
