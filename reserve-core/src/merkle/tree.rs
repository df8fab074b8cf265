use std::collections::HashMap;

use super::scheme::HashScheme;
use crate::crypto::encoding::to_hex;
use crate::crypto::Digest;

/// Position of a node in a tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A leaf (no children) or a branch over exactly two children.
///
/// A trailing odd node is paired with itself, so both children of a branch
/// may be the same node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    digest: Digest,
    children: Option<(NodeId, NodeId)>,
}

impl Node {
    fn leaf(digest: Digest) -> Self {
        Self { digest, children: None }
    }

    fn branch(digest: Digest, left: NodeId, right: NodeId) -> Self {
        Self {
            digest,
            children: Some((left, right)),
        }
    }

    pub fn digest(&self) -> &Digest {
        &self.digest
    }

    pub fn digest_hex(&self) -> String {
        to_hex(&self.digest)
    }

    /// `(left, right)` for branches, `None` for leaves.
    pub fn children(&self) -> Option<(NodeId, NodeId)> {
        self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }
}

/// An immutable Merkle tree built once from an ordered item list.
///
/// Nodes live in a flat arena. `levels[0]` holds the leaves in input order and
/// every following level holds the parents of the one below it; the last level
/// holds only the root. An empty input has no levels and no root.
#[derive(Debug, Clone)]
pub struct MerkleTree {
    scheme: HashScheme,
    nodes: Vec<Node>,
    levels: Vec<Vec<NodeId>>,
    positions: HashMap<Vec<u8>, usize>,
}

impl MerkleTree {
    /// Hash every item into a leaf and reduce pairwise until one node remains.
    ///
    /// Items are identified by their exact bytes. When an item occurs more than
    /// once, only its first position is recorded for proof lookup.
    pub fn build<I, T>(items: I, scheme: HashScheme) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        let mut nodes = Vec::new();
        let mut positions = HashMap::new();
        let mut leaves = Vec::new();

        for (index, item) in items.into_iter().enumerate() {
            let item = item.as_ref();
            leaves.push(NodeId(nodes.len()));
            nodes.push(Node::leaf(scheme.hash_leaf(item)));
            positions.entry(item.to_vec()).or_insert(index);
        }

        let mut levels = Vec::new();
        if !leaves.is_empty() {
            levels.push(leaves);
        }

        loop {
            let current = match levels.last() {
                Some(level) if level.len() > 1 => level,
                _ => break,
            };
            let parents = reduce_level(&scheme, &mut nodes, current);
            levels.push(parents);
        }

        tracing::debug!(
            leaves = levels.first().map_or(0, Vec::len),
            depth = levels.len(),
            leaf_tag = scheme.leaf_tag(),
            branch_tag = scheme.branch_tag(),
            "merkle tree built"
        );

        Self {
            scheme,
            nodes,
            levels,
            positions,
        }
    }

    /// Root digest, or `None` when the tree was built from no items.
    pub fn root(&self) -> Option<Digest> {
        self.root_node().map(|node| node.digest)
    }

    pub fn root_hex(&self) -> Option<String> {
        self.root_node().map(Node::digest_hex)
    }

    pub fn root_node(&self) -> Option<&Node> {
        let id = self.levels.last()?.first()?;
        Some(&self.nodes[id.0])
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Leaf digests in input order.
    pub fn leaves(&self) -> impl Iterator<Item = &Digest> + '_ {
        self.levels
            .first()
            .into_iter()
            .flatten()
            .map(move |id| &self.nodes[id.0].digest)
    }

    pub fn leaf_count(&self) -> usize {
        self.levels.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Number of levels including leaves and root.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// First leaf position holding exactly `item`.
    pub fn position(&self, item: &[u8]) -> Option<usize> {
        self.positions.get(item).copied()
    }

    pub fn contains(&self, item: &[u8]) -> bool {
        self.positions.contains_key(item)
    }

    pub fn scheme(&self) -> &HashScheme {
        &self.scheme
    }

    pub(crate) fn levels(&self) -> &[Vec<NodeId>] {
        &self.levels
    }
}

/// The `(left, right)` positions of the pair starting at `left` in a level of
/// `len` nodes. A trailing odd node is its own right partner.
pub(crate) fn pair_at(left: usize, len: usize) -> (usize, usize) {
    (left, (left + 1).min(len - 1))
}

fn reduce_level(scheme: &HashScheme, nodes: &mut Vec<Node>, level: &[NodeId]) -> Vec<NodeId> {
    (0..level.len())
        .step_by(2)
        .map(|start| {
            let (left, right) = pair_at(start, level.len());
            let (left, right) = (level[left], level[right]);
            let digest = scheme.hash_branch(&nodes[left.0].digest, &nodes[right.0].digest);
            let id = NodeId(nodes.len());
            nodes.push(Node::branch(digest, left, right));
            id
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::tagged::tagged_hash;

    fn bitcoin_tree(items: &[&str]) -> MerkleTree {
        MerkleTree::build(items, HashScheme::bitcoin())
    }

    #[test]
    fn test_empty_tree() {
        let tree = bitcoin_tree(&[]);
        assert!(tree.is_empty());
        assert_eq!(tree.root(), None);
        assert_eq!(tree.root_hex(), None);
        assert_eq!(tree.leaf_count(), 0);
        assert_eq!(tree.leaves().count(), 0);
    }

    #[test]
    fn test_single_leaf_is_root() {
        let tree = bitcoin_tree(&["aaa"]);
        let leaf = tagged_hash("Bitcoin_Transaction", b"aaa");
        assert_eq!(tree.root(), Some(leaf));
        assert_eq!(tree.depth(), 1);
        assert!(tree.root_node().unwrap().is_leaf());
    }

    #[test]
    fn test_known_root_for_four_items() {
        let tree = bitcoin_tree(&["aaa", "bbb", "ccc", "ddd"]);
        assert_eq!(
            tree.root_hex().unwrap(),
            "718b18c132f71dad76a3977a587e40c876bab3436b0f9a0446dbfadca2c13ea3"
        );
        assert_eq!(tree.depth(), 3);
    }

    #[test]
    fn test_known_root_for_five_items() {
        let tree = bitcoin_tree(&["aaa", "bbb", "ccc", "ddd", "eee"]);
        assert_eq!(
            tree.root_hex().unwrap(),
            "4aa906745f72053498ecc74f79813370a4fe04f85e09421df2d5ef760dfa94b5"
        );
        assert_eq!(tree.depth(), 4);
    }

    #[test]
    fn test_odd_count_matches_duplicated_last_item() {
        let odd = bitcoin_tree(&["aaa", "bbb", "ccc"]);
        let duplicated = bitcoin_tree(&["aaa", "bbb", "ccc", "ccc"]);
        assert_eq!(odd.root(), duplicated.root());
        assert_eq!(
            odd.root_hex().unwrap(),
            "879c4d184c749f60e91d46d1e1c7dae9816f63475230378827bdcfd198ec2d3c"
        );
    }

    #[test]
    fn test_deterministic_root() {
        let items = ["aaa", "bbb", "ccc", "ddd"];
        assert_eq!(bitcoin_tree(&items).root(), bitcoin_tree(&items).root());
    }

    #[test]
    fn test_order_changes_root() {
        let a = bitcoin_tree(&["aaa", "bbb"]);
        let b = bitcoin_tree(&["bbb", "aaa"]);
        assert_ne!(a.root(), b.root());
    }

    #[test]
    fn test_scheme_changes_root() {
        let items = ["aaa", "bbb", "ccc"];
        let bitcoin = MerkleTree::build(items, HashScheme::bitcoin());
        let reserve = MerkleTree::build(items, HashScheme::proof_of_reserve());
        assert_ne!(bitcoin.root(), reserve.root());
    }

    #[test]
    fn test_branch_links_children_in_order() {
        let scheme = HashScheme::bitcoin();
        let tree = bitcoin_tree(&["aaa", "bbb"]);
        let root = tree.root_node().unwrap();
        let (left, right) = root.children().unwrap();

        assert_eq!(tree.node(left).digest(), &scheme.hash_leaf(b"aaa"));
        assert_eq!(tree.node(right).digest(), &scheme.hash_leaf(b"bbb"));
        assert_eq!(
            root.digest(),
            &scheme.hash_branch(tree.node(left).digest(), tree.node(right).digest())
        );
    }

    #[test]
    fn test_odd_node_is_paired_with_itself() {
        let tree = bitcoin_tree(&["aaa", "bbb", "ccc"]);
        let (_, right) = tree.root_node().unwrap().children().unwrap();
        let (inner_left, inner_right) = tree.node(right).children().unwrap();
        assert_eq!(inner_left, inner_right);
        assert!(tree.node(inner_left).is_leaf());
    }

    #[test]
    fn test_positions_record_first_occurrence() {
        let tree = bitcoin_tree(&["aaa", "bbb", "aaa", "ccc"]);
        assert_eq!(tree.position(b"aaa"), Some(0));
        assert_eq!(tree.position(b"bbb"), Some(1));
        assert_eq!(tree.position(b"ccc"), Some(3));
        assert_eq!(tree.position(b"zzz"), None);
        assert!(tree.contains(b"ccc"));
        assert_eq!(tree.leaf_count(), 4);
    }

    #[test]
    fn test_leaves_in_input_order() {
        let scheme = HashScheme::bitcoin();
        let tree = bitcoin_tree(&["x", "y", "z"]);
        let leaves: Vec<Digest> = tree.leaves().copied().collect();
        assert_eq!(
            leaves,
            vec![scheme.hash_leaf(b"x"), scheme.hash_leaf(b"y"), scheme.hash_leaf(b"z")]
        );
    }

    #[test]
    fn test_byte_items() {
        let items: Vec<Vec<u8>> = vec![vec![0, 1, 2], vec![0xFF], vec![]];
        let tree = MerkleTree::build(&items, HashScheme::bitcoin());
        assert_eq!(tree.leaf_count(), 3);
        assert_eq!(tree.position(&[]), Some(2));
    }

    #[test]
    fn test_large_tree_depth() {
        let items: Vec<String> = (0..1000).map(|i| format!("item-{i}")).collect();
        let tree = MerkleTree::build(&items, HashScheme::bitcoin());
        // 1000 leaves reduce over ceil(log2(1000)) = 10 levels plus the leaf level.
        assert_eq!(tree.depth(), 11);
        assert!(tree.root().is_some());
    }
}
