// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use anyhow::{bail, Context};
use fvm_ipld_blockstore::MemoryBlockstore;
use std::path::Path;
use vecgen_kernel::graph::SnapshotFilter;
use vecgen_kernel::snapshot::blake3::hash_car_blocks;
use vecgen_kernel::snapshot::{decode_car, encode_car, load_car, verify_block};
use vecgen_kernel::state::load_state_root;
use vecgen_kernel::storage::StoreAdapter;
use vecgen_persistence::vector_file;

/// Checks block hashes, the declared root and that the snapshot is the
/// complete filtered closure of its root (re-encoding gives the same blocks).
pub fn run(path: &Path) -> anyhow::Result<()> {
    let schema = vector_file::read_vector(path)?;
    let archive = decode_car(&schema.car).context("snapshot does not decode")?;

    // 1. Block hashes
    for block in &archive.blocks {
        verify_block(block)?;
    }

    // 2. Root set
    let start = schema.start_root().context("vector has no start root")?;
    if archive.roots != [start] {
        println!("\n❌ CORRUPTED\n");
        bail!("snapshot roots {:?} do not match start root {}", archive.roots, start);
    }

    // 3. Reload and re-encode
    let bs = MemoryBlockstore::new();
    let store = StoreAdapter::new(&bs);
    let roots = load_car(&store, &schema.car)?;
    let state = load_state_root(&bs, &start)?;

    let again = encode_car(&store, &SnapshotFilter::default(), &roots)
        .context("snapshot is not closed under its links")?;
    let expected = hash_car_blocks(&archive);
    let found = hash_car_blocks(&decode_car(&again)?);

    if expected != found {
        println!("\n❌ CORRUPTED\n");
        println!("Expected Hash: {}", hex::encode(expected));
        println!("Found Hash:    {}", hex::encode(found));
        bail!("snapshot block stream differs after re-encoding");
    }

    println!("\n✅ VERIFIED\n");
    println!("Blocks:        {}", archive.blocks.len());
    println!("State Version: {}", state.version);
    println!("Block Hash:    {}", hex::encode(found));
    println!("Byte Identical: {}\n", again == schema.car);
    Ok(())
}
