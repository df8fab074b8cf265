use serde::{Deserialize, Serialize};

use crate::error::{ReserveError, Result};
use crate::merkle::proof::{MerkleProof, ProofElement, Side};
use crate::merkle::scheme::HashScheme;
use crate::merkle::tree::MerkleTree;
use crate::record::memory::InMemoryUserStore;
use crate::record::user::User;
use crate::traits::records::RecordStore;

/// One proof step as served to users: sibling hash and `0` (left) / `1` (right).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofStep {
    pub hash: String,
    pub direction: u8,
}

/// Inclusion proof for one user. The balance is informational and is not
/// hashed on its own; it is already part of the user's leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProof {
    pub user_balance: u64,
    pub proof_elements: Vec<ProofStep>,
}

impl UserProof {
    fn from_merkle(user: &User, proof: &MerkleProof) -> Self {
        Self {
            user_balance: user.balance,
            proof_elements: proof
                .elements()
                .iter()
                .map(|element| ProofStep {
                    hash: element.hash.clone(),
                    direction: element.side.direction(),
                })
                .collect(),
        }
    }

    /// Rebuild the tree-level proof for `user`.
    pub fn to_merkle(&self, user: &User) -> Result<MerkleProof> {
        let elements = self
            .proof_elements
            .iter()
            .map(|step| -> Result<ProofElement> {
                let side = Side::from_direction(step.direction).ok_or_else(|| {
                    ReserveError::InvalidProof(format!("unknown direction {}", step.direction))
                })?;
                Ok(ProofElement::new(step.hash.clone(), side))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(MerkleProof::new(user.leaf_data(), elements))
    }
}

/// Commits a record store to a Merkle tree built once at construction.
///
/// Rebuild the service when the record set changes.
#[derive(Debug, Clone)]
pub struct ReserveService<S = InMemoryUserStore> {
    store: S,
    tree: MerkleTree,
}

impl<S: RecordStore> ReserveService<S> {
    /// Build with the proof-of-reserve leaf and branch tags.
    pub fn new(store: S) -> Self {
        Self::with_scheme(store, HashScheme::proof_of_reserve())
    }

    pub fn with_scheme(store: S, scheme: HashScheme) -> Self {
        let tree = MerkleTree::build(store.records().iter().map(User::leaf_data), scheme);
        let root = tree.root_hex();

        tracing::info!(
            users = store.len(),
            root = root.as_deref().unwrap_or("(none)"),
            "reserve tree built"
        );

        Self { store, tree }
    }

    pub fn tree(&self) -> &MerkleTree {
        &self.tree
    }

    pub fn scheme(&self) -> &HashScheme {
        self.tree.scheme()
    }

    /// Lowercase hex root, or `None` when there are no users.
    pub fn merkle_root(&self) -> Option<String> {
        self.tree.root_hex()
    }

    pub fn users(&self) -> &[User] {
        self.store.records()
    }

    pub fn user(&self, id: u32) -> Option<&User> {
        self.store.get(id)
    }

    pub fn proof_for_user(&self, id: u32) -> Result<UserProof> {
        let user = self
            .store
            .get(id)
            .ok_or_else(|| ReserveError::NotFound(format!("User with ID {id} not found")))?;

        let proof = self.tree.generate_proof(user.leaf_data())?;

        tracing::debug!(user_id = id, elements = proof.len(), "user proof generated");

        Ok(UserProof::from_merkle(user, &proof))
    }
}

/// Check a served proof for `user` against a published root.
pub fn verify_user_proof(user: &User, proof: &UserProof, root_hex: &str, scheme: &HashScheme) -> Result<bool> {
    if proof.user_balance != user.balance {
        return Ok(false);
    }
    let merkle = proof.to_merkle(user)?;
    Ok(merkle.verify(root_hex, scheme)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_ROOT: &str = "b1231de33da17c23cebd80c104b88198e0914b0463d0e14db163605b904a7ba3";

    #[test]
    fn test_sample_root() {
        let service = ReserveService::new(InMemoryUserStore::sample());
        assert_eq!(service.merkle_root().as_deref(), Some(SAMPLE_ROOT));
        assert_eq!(service.users().len(), 8);
    }

    #[test]
    fn test_every_user_proof_verifies() {
        let service = ReserveService::new(InMemoryUserStore::sample());
        let root = service.merkle_root().unwrap();

        for user in service.users() {
            let proof = service.proof_for_user(user.id).unwrap();
            assert_eq!(proof.user_balance, user.balance);
            assert_eq!(proof.proof_elements.len(), 3);
            assert!(verify_user_proof(user, &proof, &root, service.scheme()).unwrap());
        }
    }

    #[test]
    fn test_unknown_user() {
        let service = ReserveService::new(InMemoryUserStore::sample());
        let err = service.proof_for_user(99).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_empty_store_has_no_root() {
        let service = ReserveService::new(InMemoryUserStore::default());
        assert_eq!(service.merkle_root(), None);
        assert!(service.proof_for_user(1).unwrap_err().is_not_found());
    }

    #[test]
    fn test_wrong_balance_rejected() {
        let service = ReserveService::new(InMemoryUserStore::sample());
        let root = service.merkle_root().unwrap();
        let proof = service.proof_for_user(2).unwrap();

        let inflated = User::new(2, 999_999);
        assert!(!verify_user_proof(&inflated, &proof, &root, service.scheme()).unwrap());

        let mut claimed = proof.clone();
        claimed.user_balance = inflated.balance;
        assert!(!verify_user_proof(&inflated, &claimed, &root, service.scheme()).unwrap());
    }

    #[test]
    fn test_unknown_direction_is_invalid() {
        let service = ReserveService::new(InMemoryUserStore::sample());
        let root = service.merkle_root().unwrap();
        let mut proof = service.proof_for_user(1).unwrap();
        proof.proof_elements[0].direction = 7;

        let user = *service.user(1).unwrap();
        let err = verify_user_proof(&user, &proof, &root, service.scheme()).unwrap_err();
        assert!(matches!(err, ReserveError::InvalidProof(_)));
    }

    #[test]
    fn test_malformed_hash_is_distinct_from_mismatch() {
        let service = ReserveService::new(InMemoryUserStore::sample());
        let root = service.merkle_root().unwrap();
        let user = *service.user(4).unwrap();
        let mut proof = service.proof_for_user(4).unwrap();
        proof.proof_elements[1].hash = "xyz".to_string();

        let err = verify_user_proof(&user, &proof, &root, service.scheme()).unwrap_err();
        assert!(matches!(err, ReserveError::Merkle(ref e) if e.is_invalid_encoding()));
    }

    #[test]
    fn test_user_proof_json_is_camel_case() {
        let service = ReserveService::new(InMemoryUserStore::sample());
        let json = serde_json::to_value(service.proof_for_user(1).unwrap()).unwrap();

        assert_eq!(json["userBalance"], 1111);
        assert_eq!(json["proofElements"][0]["direction"], 1);
        assert_eq!(json["proofElements"][0]["hash"].as_str().unwrap().len(), 64);
    }

    #[test]
    fn test_custom_scheme() {
        let service = ReserveService::with_scheme(InMemoryUserStore::sample(), HashScheme::bitcoin());
        assert_ne!(service.merkle_root().as_deref(), Some(SAMPLE_ROOT));
        assert_eq!(service.scheme(), &HashScheme::bitcoin());
    }
}
