// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::path::Path;
use vecgen_kernel::proof::VectorProof;
use vecgen_persistence::vector_file;

/// Prints the BLAKE3 fingerprint of a vector file as JSON.
pub fn run(path: &Path) -> anyhow::Result<VectorProof> {
    let schema = vector_file::read_vector(path)?;
    let proof = VectorProof::from_schema(&schema)?;
    println!("{}", serde_json::to_string_pretty(&proof)?);
    Ok(proof)
}
