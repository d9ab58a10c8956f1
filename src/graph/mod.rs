// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Merkle DAG traversal.
//!
//! Link extraction, link filtering and the walk itself are separate pieces so
//! that visit order and inclusion rules can be tested on their own.

pub mod links;
pub mod filter;
pub mod walker;

pub use filter::{IncludeAll, LinkFilter, SnapshotFilter};
pub use walker::DagWalker;
