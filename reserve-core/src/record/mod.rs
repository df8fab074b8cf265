//! Records committed by the proof-of-reserve tree and an in-memory store for them.

pub mod user;
pub mod memory;
