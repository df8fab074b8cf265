use std::path::Path;

use tracing::info;

use reserve_core::merkle::proof::MerkleProof;
use reserve_core::merkle::scheme::HashScheme;
use reserve_core::merkle::verify::verify_proof;

/// Outcome of checking a proof file, kept apart from I/O and parse failures.
#[derive(Debug, PartialEq, Eq)]
enum Verdict {
    Valid,
    Mismatch,
}

/// Verify a proof file against `root`. Exits non-zero unless the proof is valid.
pub fn run_verify(proof_path: &Path, root: &str, scheme: &HashScheme) -> Result<(), Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(proof_path)
        .map_err(|e| format!("failed to read {}: {e}", proof_path.display()))?;
    let proof: MerkleProof = serde_json::from_str(&contents)
        .map_err(|e| format!("failed to parse proof: {e}"))?;

    match check(&proof, root, scheme)? {
        Verdict::Valid => {
            info!(elements = proof.len(), "Proof verified");
            println!("Proof is valid");
            Ok(())
        }
        Verdict::Mismatch => Err("proof does not match the expected root".into()),
    }
}

fn check(proof: &MerkleProof, root: &str, scheme: &HashScheme) -> Result<Verdict, Box<dyn std::error::Error>> {
    let valid = verify_proof(proof, root, scheme).map_err(|e| format!("malformed proof: {e}"))?;
    Ok(if valid { Verdict::Valid } else { Verdict::Mismatch })
}
