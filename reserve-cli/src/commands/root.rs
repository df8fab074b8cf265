use tracing::info;

use reserve_core::merkle::scheme::HashScheme;
use reserve_core::merkle::tree::MerkleTree;

use super::load_items;
use crate::ItemArgs;

/// Print the Merkle root over the given items.
pub fn run_root(args: &ItemArgs, scheme: &HashScheme) -> Result<(), Box<dyn std::error::Error>> {
    let items = load_items(args)?;
    let tree = MerkleTree::build(&items, scheme.clone());

    info!(leaves = tree.leaf_count(), "Root computed");
    println!("{}", render_root(&tree));
    Ok(())
}

fn render_root(tree: &MerkleTree) -> String {
    tree.root_hex().unwrap_or_else(|| "(no root)".to_string())
}
