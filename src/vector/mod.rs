// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Test-vector accumulation.
pub mod context;
pub mod builder;

pub use builder::{TestVector, TestVectorBuilder};
pub use context::ExecutionContext;
