// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.

use cid::Cid;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VectorError {
    /// The content identifier is absent from the store.
    #[error("block not found: {0}")]
    NotFound(Cid),

    /// Deletion or key enumeration on the write-once adapter.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// A message or return value could not be rendered to its binary form.
    #[error("encoding failure: {0}")]
    EncodingFailure(String),

    #[error("store write failed: {0}")]
    StoreWrite(String),

    #[error("store read failed for {cid}: {reason}")]
    StoreRead { cid: Cid, reason: String },

    /// Malformed CBOR, CAR framing or content identifier bytes.
    #[error("decode error: {0}")]
    Decode(String),

    #[error("unsupported block codec: {0:#x}")]
    UnsupportedCodec(u64),

    #[error("a CAR archive needs at least one root")]
    EmptyRoots,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, VectorError>;
