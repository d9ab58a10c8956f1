// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::error::{PersistenceError, Result};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;
use tracing::info;
use vecgen_kernel::config::VECTOR_CLASS;
use vecgen_kernel::TestVectorSchema;

/// Writes `schema` as pretty JSON followed by a newline and syncs the file.
pub fn write_to(path: impl AsRef<Path>, schema: &TestVectorSchema) -> Result<()> {
    let path = path.as_ref();
    let mut file = File::create(path)?;
    serde_json::to_writer_pretty(&mut file, schema)?;
    file.write_all(b"\n")?;
    file.sync_data()?;
    info!(path = %path.display(), id = %schema.meta.id, "wrote test vector");
    Ok(())
}

pub fn read_vector(path: impl AsRef<Path>) -> Result<TestVectorSchema> {
    let file = File::open(path)?;
    let schema: TestVectorSchema = serde_json::from_reader(BufReader::new(file))?;
    if schema.class != VECTOR_CLASS {
        return Err(PersistenceError::InvalidFormat(format!(
            "unsupported vector class {:?}",
            schema.class
        )));
    }
    Ok(schema)
}
