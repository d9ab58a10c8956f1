// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::path::Path;
use tracing::info;
use vecgen_kernel::GenerationConfig;
use vecgen_persistence::fixtures::{generate_transfer_vector, TRANSFER_VALUE};
use vecgen_persistence::vector_file;

/// Writes the reference transfer vector to `out`.
pub fn run(out: &Path, id: &str, network: Option<String>) -> anyhow::Result<()> {
    let mut config = GenerationConfig::default();
    if let Some(name) = network {
        config = config.with_network_name(name);
    }

    let schema = generate_transfer_vector(id, TRANSFER_VALUE, &config)?;
    vector_file::write_to(out, &schema)?;
    info!(network = %config.network_name, "sample vector generated");
    println!("Wrote {} to {}", id, out.display());
    Ok(())
}
