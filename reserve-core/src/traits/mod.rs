//! Seams between the Merkle core and the data it commits to.

pub mod records;
