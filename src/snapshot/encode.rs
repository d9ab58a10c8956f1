// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Snapshot encoding.
//!
//! Layout of the uncompressed stream:
//! ```text
//! varint(len(header)) | header (DAG-CBOR {"roots": [..], "version": 1})
//! for each block in walk order:
//!   varint(len(cid) + len(data)) | cid bytes | data
//! ```
//! The stream is gzip-compressed with no timestamp or file name, so equal
//! inputs give equal bytes.

use std::io::Write;

use cid::Cid;
use flate2::write::GzEncoder;
use flate2::Compression;
use fvm_ipld_encoding::to_vec;
use tracing::debug;

use crate::error::{Result, VectorError};
use crate::graph::{DagWalker, LinkFilter};
use crate::snapshot::{CarHeader, CAR_VERSION};
use crate::storage::{Block, DagStore};

/// gzip(CAR(roots, filtered closure of roots)).
pub fn encode_car<S: DagStore, F: LinkFilter>(store: &S, filter: &F, roots: &[Cid]) -> Result<Vec<u8>> {
    let mut gz = GzEncoder::new(Vec::new(), Compression::default());
    let blocks = write_car(&mut gz, store, filter, roots)?;
    let out = gz.finish()?;
    debug!(roots = roots.len(), blocks, bytes = out.len(), "encoded snapshot");
    Ok(out)
}

/// Writes an uncompressed CAR to `writer` and returns the block count.
pub fn write_car<W: Write, S: DagStore, F: LinkFilter>(
    writer: &mut W,
    store: &S,
    filter: &F,
    roots: &[Cid],
) -> Result<usize> {
    if roots.is_empty() {
        return Err(VectorError::EmptyRoots);
    }
    write_header(writer, roots)?;
    DagWalker::new(store, filter).walk(roots, |block| write_block(writer, block))
}

fn write_header<W: Write>(writer: &mut W, roots: &[Cid]) -> Result<()> {
    let header = CarHeader {
        roots: roots.to_vec(),
        version: CAR_VERSION,
    };
    let bytes = to_vec(&header).map_err(|e| VectorError::EncodingFailure(format!("CAR header: {}", e)))?;
    write_varint(writer, bytes.len())?;
    writer.write_all(&bytes)?;
    Ok(())
}

fn write_block<W: Write>(writer: &mut W, block: &Block) -> Result<()> {
    let cid = block.cid.to_bytes();
    write_varint(writer, cid.len() + block.data.len())?;
    writer.write_all(&cid)?;
    writer.write_all(&block.data)?;
    Ok(())
}

fn write_varint<W: Write>(writer: &mut W, value: usize) -> Result<()> {
    let mut buf = unsigned_varint::encode::usize_buffer();
    writer.write_all(unsigned_varint::encode::usize(value, &mut buf))?;
    Ok(())
}
