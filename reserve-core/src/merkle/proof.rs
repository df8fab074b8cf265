use serde::{Deserialize, Serialize};

use super::tree::{pair_at, MerkleTree};
use super::{MerkleError, Result};
use crate::constants::{DIRECTION_LEFT, DIRECTION_RIGHT};
use crate::crypto::encoding::to_hex;

/// Which side of the path node a sibling digest sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// `0` for a left sibling, `1` for a right sibling.
    pub fn direction(self) -> u8 {
        match self {
            Side::Left => DIRECTION_LEFT,
            Side::Right => DIRECTION_RIGHT,
        }
    }

    pub fn from_direction(direction: u8) -> Option<Self> {
        match direction {
            DIRECTION_LEFT => Some(Side::Left),
            DIRECTION_RIGHT => Some(Side::Right),
            _ => None,
        }
    }
}

/// One level of a proof: the hex-encoded sibling digest and its side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofElement {
    pub hash: String,
    pub side: Side,
}

impl ProofElement {
    pub fn new(hash: impl Into<String>, side: Side) -> Self {
        Self {
            hash: hash.into(),
            side,
        }
    }
}

/// Inclusion proof for a single item.
///
/// Elements run from the leaf level up to, but not including, the root. The
/// proof carries no reference to the tree it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleProof {
    #[serde(with = "hex::serde")]
    item: Vec<u8>,
    elements: Vec<ProofElement>,
}

impl MerkleProof {
    pub fn new(item: impl Into<Vec<u8>>, elements: Vec<ProofElement>) -> Self {
        Self {
            item: item.into(),
            elements,
        }
    }

    pub fn item(&self) -> &[u8] {
        &self.item
    }

    /// The item as text, when it is valid UTF-8.
    pub fn item_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.item).ok()
    }

    pub fn elements(&self) -> &[ProofElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl MerkleTree {
    /// Build the sibling path from `item`'s leaf to the root.
    ///
    /// Walks the same pairing the builder used, including the self-paired odd
    /// node, so the proof replays to this tree's root. Fails with
    /// [`MerkleError::NotFound`] when `item` is not a leaf, which always holds
    /// for an empty tree.
    pub fn generate_proof(&self, item: impl AsRef<[u8]>) -> Result<MerkleProof> {
        let item = item.as_ref();
        let mut index = self.position(item).ok_or(MerkleError::NotFound)?;
        let mut elements = Vec::new();

        for level in self.levels().iter().take_while(|level| level.len() > 1) {
            let (left, right) = pair_at(index - index % 2, level.len());

            let element = if index == left {
                ProofElement::new(self.node(level[right]).digest_hex(), Side::Right)
            } else {
                ProofElement::new(self.node(level[left]).digest_hex(), Side::Left)
            };
            elements.push(element);

            index /= 2;
        }

        tracing::debug!(elements = elements.len(), "merkle proof generated");

        Ok(MerkleProof::new(item, elements))
    }
}
