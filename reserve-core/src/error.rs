use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReserveError {
    #[error("Merkle tree error: {0}")]
    Merkle(#[from] crate::merkle::MerkleError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid proof: {0}")]
    InvalidProof(String),
}

impl ReserveError {
    /// Unknown identifiers and items missing from the tree both count as not found.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ReserveError::NotFound(_) | ReserveError::Merkle(crate::merkle::MerkleError::NotFound)
        )
    }
}

pub type Result<T> = std::result::Result<T, ReserveError>;
