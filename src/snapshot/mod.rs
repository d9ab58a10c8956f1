// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Portable state snapshots: gzip-compressed CARv1 archives.
pub mod encode;
pub mod decode;
pub mod blake3;

pub use decode::{decode_car, load_car, verify_block, CarArchive};
pub use encode::{encode_car, write_car};

/// The only CAR version produced or accepted.
pub const CAR_VERSION: u64 = 1;

/// CARv1 header: declared roots and the format version.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CarHeader {
    pub roots: Vec<cid::Cid>,
    pub version: u64,
}
