// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! BLAKE3 fingerprints of vector artifacts.
//!
//! Content identifiers use the protocol hash; these digests only name
//! generated files so tooling can compare them cheaply.

use crate::snapshot::CarArchive;

/// Compute BLAKE3 hash of a byte slice
pub fn hash_bytes(data: &[u8]) -> [u8; 32] {
    *blake3::hash(data).as_bytes()
}

/// Hash of the decoded archive: roots, then `cid | len | data` per block in
/// stored order. Independent of how the blob was compressed.
pub fn hash_car_blocks(archive: &CarArchive) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();

    hasher.update(&(archive.roots.len() as u64).to_le_bytes());
    for root in &archive.roots {
        hasher.update(&root.to_bytes());
    }

    for block in &archive.blocks {
        hasher.update(&block.cid.to_bytes());
        hasher.update(&(block.data.len() as u64).to_le_bytes());
        hasher.update(&block.data);
    }

    *hasher.finalize().as_bytes()
}
