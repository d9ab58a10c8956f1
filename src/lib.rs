// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

//! vecgen-kernel: deterministic state snapshots and conformance test vectors.
//!
//! A vector captures a wrapped state root before and after a single message,
//! the message itself, its receipt, and a gzip-compressed CAR of the start
//! state. Every byte of the output is a pure function of the store contents
//! and the configured values, so independent generators agree bit for bit.

pub mod config;
pub mod error;
pub mod types;
pub mod storage;
pub mod graph;
pub mod snapshot;
pub mod state;
pub mod vector;
pub mod schema;
pub mod proof;

#[cfg(test)]
pub mod tests;

pub use config::GenerationConfig;
pub use error::{Result, VectorError};
pub use schema::TestVectorSchema;
pub use vector::{ExecutionContext, TestVector, TestVectorBuilder};
