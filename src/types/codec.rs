// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Multicodec and multihash constants.

use cid::Cid;
use multihash_codetable::{Code, MultihashDigest};

/// Raw binary block.
pub const RAW: u64 = 0x55;
/// DAG-CBOR block, the encoding of every state object.
pub const DAG_CBOR: u64 = 0x71;
/// Unsealed sector data commitment (CommD).
pub const FIL_COMMITMENT_UNSEALED: u64 = 0xf101;
/// Sealed sector replica commitment (CommR).
pub const FIL_COMMITMENT_SEALED: u64 = 0xf102;

/// Identity multihash: the digest is the input itself.
pub const IDENTITY: u64 = 0x00;

/// Multihash used for every block this crate writes.
pub const DEFAULT_HASH: Code = Code::Blake2b256;

/// CIDv1 of `data` under `codec`, hashed with BLAKE2b-256.
pub fn cid_for(codec: u64, data: &[u8]) -> Cid {
    Cid::new_v1(codec, DEFAULT_HASH.digest(data))
}

/// True when `cid` names an off-chain sector commitment.
pub fn is_sector_commitment(cid: &Cid) -> bool {
    matches!(cid.codec(), FIL_COMMITMENT_SEALED | FIL_COMMITMENT_UNSEALED)
}
