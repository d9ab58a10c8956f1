// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Block storage seen by the capture pipeline.

pub mod adapter;

pub use adapter::{Block, DagStore, Presence, StoreAdapter};
