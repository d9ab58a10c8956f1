// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Top-level state objects.
pub mod root;

pub use root::{load_state_root, wrap, wrap_with_version, StateInfo0, StateRoot};
