// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

use std::path::Path;
use vecgen_kernel::snapshot::decode_car;
use vecgen_persistence::vector_file;

pub fn run(path: &Path) -> anyhow::Result<()> {
    let schema = vector_file::read_vector(path)?;

    println!("\nTest Vector Report");
    println!("------------------");

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Field", "Value"]);

    table.add_row(vec!["ID", schema.meta.id.as_str()]);
    table.add_row(vec!["Class", schema.class.as_str()]);
    let sources: Vec<&str> = schema.meta.gen.iter().map(|g| g.source.as_str()).collect();
    table.add_row(vec!["Generator".to_string(), sources.join(", ")]);

    for variant in &schema.preconditions.variants {
        table.add_row(vec![
            "Variant".to_string(),
            format!("{} (epoch {}, nv {})", variant.id, variant.epoch, variant.network_version),
        ]);
    }
    table.add_row(vec!["Base Fee".to_string(), schema.preconditions.basefee.to_string()]);
    table.add_row(vec!["Circ Supply".to_string(), schema.preconditions.circ_supply.to_string()]);
    table.add_row(vec!["Start Root".to_string(), root_label(schema.start_root())]);
    table.add_row(vec!["End Root".to_string(), root_label(schema.end_root())]);

    // 1. Snapshot
    match decode_car(&schema.car) {
        Ok(archive) => {
            let raw: usize = archive.blocks.iter().map(|b| b.data.len()).sum();
            table.add_row(vec![
                "Snapshot".to_string(),
                format!(
                    "{} blocks, {} roots, {} bytes gz / {} bytes data",
                    archive.blocks.len(),
                    archive.roots.len(),
                    schema.car.len(),
                    raw
                ),
            ]);
        }
        Err(e) => {
            table.add_row(vec!["Snapshot".to_string(), format!("CORRUPT: {}", e)]);
        }
    }

    // 2. Messages
    for (i, msg) in schema.apply_messages.iter().enumerate() {
        table.add_row(vec![format!("Message #{}", i), format!("{} bytes", msg.bytes.len())]);
    }

    // 3. Receipts
    for (i, receipt) in schema.postconditions.receipts.iter().enumerate() {
        table.add_row(vec![
            format!("Receipt #{}", i),
            format!(
                "exit {}, gas {}, return {} bytes",
                receipt.exit_code,
                receipt.gas_used,
                receipt.return_value.len()
            ),
        ]);
    }

    println!("{table}\n");

    Ok(())
}

fn root_label<T: ToString>(root: Option<T>) -> String {
    root.map(|c| c.to_string()).unwrap_or_else(|| "UNSET".to_string())
}
