use reserve_core::merkle::scheme::HashScheme;
use reserve_core::merkle::tree::MerkleTree;

const DEMO_ITEMS: [&str; 5] = ["aaa", "bbb", "ccc", "ddd", "eee"];
const DEMO_TARGET: &str = "ccc";

/// Print the root for aaa..eee, the proof for `ccc`, and whether it verifies.
pub fn run_demo(scheme: &HashScheme) -> Result<(), Box<dyn std::error::Error>> {
    let tree = MerkleTree::build(DEMO_ITEMS, scheme.clone());
    let root = tree.root_hex().ok_or("demo tree has no root")?;

    println!("Merkle Tree Example");
    println!("-------------------");
    println!("Example data: {}", DEMO_ITEMS.join(", "));
    println!("Merkle root: {root}");

    let proof = tree.generate_proof(DEMO_TARGET)?;
    println!("Proof for '{DEMO_TARGET}':");
    println!("  Leaf data: {}", proof.item_str().unwrap_or(DEMO_TARGET));
    println!("  Proof elements:");
    for element in proof.elements() {
        println!("    Hash: {}, Side: {:?}", element.hash, element.side);
    }

    let valid = proof.verify(&root, scheme)?;
    println!("Proof is valid: {valid}");
    Ok(())
}
