// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Snapshot decoding.

use std::io::{Cursor, Read};

use cid::Cid;
use flate2::read::MultiGzDecoder;
use fvm_ipld_encoding::from_slice;
use multihash_codetable::{Code, MultihashDigest};

use crate::error::{Result, VectorError};
use crate::snapshot::{CarHeader, CAR_VERSION};
use crate::storage::{Block, DagStore};
use crate::types::codec::IDENTITY;

/// A decoded archive, blocks in stored order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarArchive {
    pub roots: Vec<Cid>,
    pub blocks: Vec<Block>,
}

/// Decompresses and parses a snapshot blob. Concatenated gzip members are
/// read as one stream.
pub fn decode_car(compressed: &[u8]) -> Result<CarArchive> {
    let mut raw = Vec::new();
    MultiGzDecoder::new(compressed).read_to_end(&mut raw)?;
    parse_car(&raw)
}

/// Parses an uncompressed CARv1 stream.
pub fn parse_car(raw: &[u8]) -> Result<CarArchive> {
    let (header, mut rest) = read_section(raw)?;
    let header: CarHeader =
        from_slice(header).map_err(|e| VectorError::Decode(format!("CAR header: {}", e)))?;
    if header.version != CAR_VERSION {
        return Err(VectorError::Decode(format!("unsupported CAR version {}", header.version)));
    }

    let mut blocks = Vec::new();
    while !rest.is_empty() {
        let (section, tail) = read_section(rest)?;
        rest = tail;

        let mut cursor = Cursor::new(section);
        let cid = Cid::read_bytes(&mut cursor).map_err(|e| VectorError::Decode(format!("block cid: {}", e)))?;
        let data = section[cursor.position() as usize..].to_vec();
        blocks.push(Block::new(cid, data));
    }

    Ok(CarArchive {
        roots: header.roots,
        blocks,
    })
}

/// Writes every block of a snapshot blob into `store` and returns its roots.
/// Blocks whose bytes do not match their identifier are rejected.
pub fn load_car<S: DagStore>(store: &S, compressed: &[u8]) -> Result<Vec<Cid>> {
    let archive = decode_car(compressed)?;
    for block in &archive.blocks {
        verify_block(block)?;
    }
    store.put_many(&archive.blocks)?;
    Ok(archive.roots)
}

/// Checks a block's bytes against its multihash. Hash functions this crate
/// does not know are accepted unchecked.
pub fn verify_block(block: &Block) -> Result<()> {
    let hash = block.cid.hash();
    let ok = if hash.code() == IDENTITY {
        hash.digest() == block.data.as_slice()
    } else {
        match Code::try_from(hash.code()) {
            Ok(code) => code.digest(&block.data) == *hash,
            Err(_) => true,
        }
    };
    if ok {
        Ok(())
    } else {
        Err(VectorError::Decode(format!("block {} does not match its hash", block.cid)))
    }
}

fn read_section(buf: &[u8]) -> Result<(&[u8], &[u8])> {
    let (len, rest) = unsigned_varint::decode::usize(buf)
        .map_err(|e| VectorError::Decode(format!("section length: {}", e)))?;
    if len > rest.len() {
        return Err(VectorError::Decode("truncated CAR section".to_string()));
    }
    Ok(rest.split_at(len))
}
