//! Proof of reserve: commit every user's balance to one root and hand each user
//! the path that proves their own entry is included.

pub mod service;
