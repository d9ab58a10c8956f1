// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Link extraction from encoded blocks.

use std::io::Cursor;

use byteorder::{BigEndian, ReadBytesExt};
use cid::Cid;

use crate::error::{Result, VectorError};
use crate::storage::Block;
use crate::types::codec::{DAG_CBOR, RAW};

const MAJOR_UINT: u8 = 0;
const MAJOR_NEGINT: u8 = 1;
const MAJOR_BYTES: u8 = 2;
const MAJOR_TEXT: u8 = 3;
const MAJOR_ARRAY: u8 = 4;
const MAJOR_MAP: u8 = 5;
const MAJOR_TAG: u8 = 6;

/// CBOR tag marking a content identifier in DAG-CBOR.
const CID_TAG: u64 = 42;

/// Outbound links of a block, in stored order.
pub fn block_links(block: &Block) -> Result<Vec<Cid>> {
    match block.cid.codec() {
        DAG_CBOR => scan_links(&block.data),
        RAW => Ok(Vec::new()),
        other => Err(VectorError::UnsupportedCodec(other)),
    }
}

/// Scans one DAG-CBOR item and returns every CID it contains, in the order the
/// links appear in the encoding.
///
/// Nesting is tracked with an explicit stack of items still owed by each open
/// container, so deep objects cannot exhaust the call stack.
pub fn scan_links(data: &[u8]) -> Result<Vec<Cid>> {
    let mut cursor = Cursor::new(data);
    let mut links = Vec::new();
    let mut owed: Vec<u64> = vec![1];

    while let Some(remaining) = owed.last_mut() {
        if *remaining == 0 {
            owed.pop();
            continue;
        }
        *remaining -= 1;

        let (major, arg) = read_head(&mut cursor)?;
        match major {
            MAJOR_UINT | MAJOR_NEGINT => {}
            MAJOR_BYTES | MAJOR_TEXT => {
                take(&mut cursor, arg)?;
            }
            MAJOR_ARRAY => owed.push(arg),
            MAJOR_MAP => {
                let items = arg
                    .checked_mul(2)
                    .ok_or_else(|| malformed("map length overflow"))?;
                owed.push(items);
            }
            MAJOR_TAG => {
                if arg != CID_TAG {
                    return Err(malformed(&format!("unexpected tag {}", arg)));
                }
                links.push(read_link(&mut cursor)?);
            }
            // Simple values and floats: the head already consumed their payload.
            _ => {}
        }
    }

    if cursor.position() as usize != data.len() {
        return Err(malformed("trailing bytes after item"));
    }
    Ok(links)
}

/// Reads an item head, returning the major type and its argument.
fn read_head(cursor: &mut Cursor<&[u8]>) -> Result<(u8, u64)> {
    let initial = cursor.read_u8().map_err(|_| malformed("unexpected end of input"))?;
    let major = initial >> 5;
    let info = initial & 0x1f;
    let arg = match info {
        0..=23 => Ok(info as u64),
        24 => cursor.read_u8().map(u64::from),
        25 => cursor.read_u16::<BigEndian>().map(u64::from),
        26 => cursor.read_u32::<BigEndian>().map(u64::from),
        27 => cursor.read_u64::<BigEndian>(),
        _ => return Err(malformed("indefinite or reserved length")),
    }
    .map_err(|_| malformed("truncated item head"))?;
    Ok((major, arg))
}

fn take<'a>(cursor: &mut Cursor<&'a [u8]>, len: u64) -> Result<&'a [u8]> {
    let data: &'a [u8] = *cursor.get_ref();
    let start = cursor.position() as usize;
    let remaining = (data.len() - start) as u64;
    if len > remaining {
        return Err(malformed("truncated string"));
    }
    let end = start + len as usize;
    cursor.set_position(end as u64);
    Ok(&data[start..end])
}

fn read_link(cursor: &mut Cursor<&[u8]>) -> Result<Cid> {
    let (major, len) = read_head(cursor)?;
    if major != MAJOR_BYTES {
        return Err(malformed("link is not a byte string"));
    }
    let bytes = take(cursor, len)?;
    match bytes.split_first() {
        // Leading zero is the identity multibase prefix.
        Some((0, cid_bytes)) => {
            let mut inner = Cursor::new(cid_bytes);
            let cid = Cid::read_bytes(&mut inner).map_err(|e| VectorError::Decode(format!("bad link: {}", e)))?;
            if inner.position() as usize != cid_bytes.len() {
                return Err(malformed("trailing bytes in link"));
            }
            Ok(cid)
        }
        _ => Err(malformed("link missing multibase prefix")),
    }
}

fn malformed(what: &str) -> VectorError {
    VectorError::Decode(format!("malformed DAG-CBOR: {}", what))
}
