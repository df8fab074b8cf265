//! Platform-independent core for tagged-hash Merkle commitments.
//!
//! Tree construction, proof generation and proof verification live here so that
//! the HTTP server and the CLI produce byte-identical roots and proofs.

pub mod error;
pub mod constants;
pub mod traits;
pub mod crypto;
pub mod merkle;
pub mod record;
pub mod reserve;
