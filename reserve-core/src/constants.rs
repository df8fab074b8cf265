/// Tag for Bitcoin transaction style hashing. Default for both leaves and branches.
pub const TAG_BITCOIN_TRANSACTION: &str = "Bitcoin_Transaction";

/// Tag for proof-of-reserve leaf hashing.
pub const TAG_RESERVE_LEAF: &str = "ProofOfReserve_Leaf";

/// Tag for proof-of-reserve branch hashing.
pub const TAG_RESERVE_BRANCH: &str = "ProofOfReserve_Branch";

/// Wire value for a sibling that sits left of the path node.
pub const DIRECTION_LEFT: u8 = 0;

/// Wire value for a sibling that sits right of the path node.
pub const DIRECTION_RIGHT: u8 = 1;
