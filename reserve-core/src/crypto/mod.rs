//! Domain-separated hashing and the hex/byte helpers built around it.

pub mod tagged;
pub mod encoding;

use thiserror::Error;

/// Length in bytes of every digest produced by the tagged hash engine.
pub const DIGEST_LEN: usize = 32;

/// A SHA-256 output. Equality is byte-wise.
pub type Digest = [u8; DIGEST_LEN];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Invalid hex encoding: {0}")]
    InvalidEncoding(String),
}

pub type Result<T> = std::result::Result<T, CryptoError>;
