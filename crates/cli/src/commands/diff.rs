// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use std::path::Path;
use vecgen_kernel::proof::VectorProof;
use vecgen_persistence::vector_file;

/// Compares two vector files field by field. Returns true when identical.
pub fn run(path_a: &Path, path_b: &Path) -> anyhow::Result<bool> {
    let proof_a = VectorProof::from_schema(&vector_file::read_vector(path_a)?)?;
    let proof_b = VectorProof::from_schema(&vector_file::read_vector(path_b)?)?;

    let status = if proof_a.matches(&proof_b) { "IDENTICAL" } else { "DRIFTED" };

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Property", "A", "B", ""]);

    let unset = || "UNSET".to_string();
    let rows = [
        ("Vector ID", proof_a.vector_id.clone(), proof_b.vector_id.clone()),
        ("Snapshot", proof_a.car_hash.clone(), proof_b.car_hash.clone()),
        ("Messages", proof_a.message_hash.clone(), proof_b.message_hash.clone()),
        ("Receipts", proof_a.receipt_hash.clone(), proof_b.receipt_hash.clone()),
        (
            "Start Root",
            proof_a.start_root.clone().unwrap_or_else(unset),
            proof_b.start_root.clone().unwrap_or_else(unset),
        ),
        (
            "End Root",
            proof_a.end_root.clone().unwrap_or_else(unset),
            proof_b.end_root.clone().unwrap_or_else(unset),
        ),
    ];
    for (name, a, b) in rows {
        let mark = if a == b { "" } else { "≠" };
        table.add_row(vec![name.to_string(), a, b, mark.to_string()]);
    }
    table.add_row(vec!["Status".to_string(), status.to_string(), String::new(), String::new()]);

    println!("\nVector Comparison");
    println!("-----------------");
    println!("{table}\n");

    Ok(status == "IDENTICAL")
}
