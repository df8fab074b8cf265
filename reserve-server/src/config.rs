use std::env;

use reserve_core::constants::{TAG_RESERVE_BRANCH, TAG_RESERVE_LEAF};
use reserve_core::merkle::scheme::HashScheme;

/// Server configuration loaded from environment variables.
pub struct Config {
    /// Port for the Axum HTTP listener.
    pub http_port: u16,
    /// Tag used to hash each user record into a leaf.
    pub leaf_tag: String,
    /// Tag used to hash each pair of child digests into a branch.
    pub branch_tag: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// - `HTTP_PORT` (optional, default 8080): Port for the HTTP API.
    /// - `LEAF_TAG` (optional, default `ProofOfReserve_Leaf`).
    /// - `BRANCH_TAG` (optional, default `ProofOfReserve_Branch`).
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let http_port = lookup("HTTP_PORT")
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(8080);

        let leaf_tag = lookup("LEAF_TAG")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| TAG_RESERVE_LEAF.to_string());

        let branch_tag = lookup("BRANCH_TAG")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| TAG_RESERVE_BRANCH.to_string());

        Self {
            http_port,
            leaf_tag,
            branch_tag,
        }
    }

    pub fn scheme(&self) -> HashScheme {
        HashScheme::new(self.leaf_tag.as_str(), self.branch_tag.as_str())
    }
}
