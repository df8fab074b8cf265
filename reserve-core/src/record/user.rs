use std::fmt;

use serde::{Deserialize, Serialize};

/// An account holder and their balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub balance: u64,
}

impl User {
    pub fn new(id: u32, balance: u64) -> Self {
        Self { id, balance }
    }

    /// Leaf item for this user: `(id,balance)`, one comma and no whitespace.
    pub fn leaf_data(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.id, self.balance)
    }
}
