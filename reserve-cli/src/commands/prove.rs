use std::path::Path;

use tracing::info;

use reserve_core::merkle::proof::MerkleProof;
use reserve_core::merkle::scheme::HashScheme;
use reserve_core::merkle::tree::MerkleTree;

use super::load_items;
use crate::ItemArgs;

/// Generate a proof for `item` and print it, or write it to `out`.
pub fn run_prove(
    item: &str,
    args: &ItemArgs,
    out: Option<&Path>,
    scheme: &HashScheme,
) -> Result<(), Box<dyn std::error::Error>> {
    let items = load_items(args)?;
    let (proof, root) = prove(item, &items, scheme)?;
    let json = serde_json::to_string_pretty(&proof)?;

    match out {
        Some(path) => {
            std::fs::write(path, &json)
                .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
            info!(path = %path.display(), elements = proof.len(), "Proof written");
            println!("Root: {root}");
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn prove(
    item: &str,
    items: &[String],
    scheme: &HashScheme,
) -> Result<(MerkleProof, String), Box<dyn std::error::Error>> {
    let tree = MerkleTree::build(items, scheme.clone());
    let proof = tree.generate_proof(item)?;
    let root = tree.root_hex().ok_or("tree has no root")?;
    Ok((proof, root))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_prove_returns_verifiable_proof() {
        let scheme = HashScheme::bitcoin();
        let (proof, root) = prove("bbb", &items(&["aaa", "bbb", "ccc"]), &scheme).unwrap();
        assert_eq!(proof.len(), 2);
        assert!(proof.verify(&root, &scheme).unwrap());
    }

    #[test]
    fn test_prove_unknown_item() {
        let err = prove("zzz", &items(&["aaa"]), &HashScheme::bitcoin()).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_run_prove_writes_file() {
        let path = std::env::temp_dir().join(format!("reserve-proof-{}.json", std::process::id()));
        let args = ItemArgs {
            items: items(&["aaa", "bbb", "ccc", "ddd"]),
            items_file: None,
        };
        run_prove("ddd", &args, Some(&path), &HashScheme::bitcoin()).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        let proof: MerkleProof = serde_json::from_str(&written).unwrap();
        assert_eq!(proof.item_str(), Some("ddd"));
    }
}
