// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Configuration constants.

use fvm_shared::econ::TokenAmount;

/// Layout version of the top-level state object.
pub const CURRENT_STATE_TREE_VERSION: u64 = 3;

/// Variant name written into `preconditions.variants[0].id`.
pub const DEFAULT_NETWORK_NAME: &str = "hyperdrive";

/// Generator tag written into `_meta.gen[0].source`.
pub const DEFAULT_GENERATOR_SOURCE: &str = "specs-actors_test_auto_gen";

/// Gas limit stamped on every generated message.
pub const DEFAULT_GAS_LIMIT: u64 = 5_000_000_000;

/// Schema class of every vector this crate emits.
pub const VECTOR_CLASS: &str = "message";

/// Values threaded through a generation run.
///
/// Nothing here is global: two runs with different configs can coexist in one
/// process and produce vectors for different network variants.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    pub network_name: String,
    pub generator_source: String,
    pub state_tree_version: u64,
    pub base_fee: TokenAmount,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            network_name: DEFAULT_NETWORK_NAME.to_string(),
            generator_source: DEFAULT_GENERATOR_SOURCE.to_string(),
            state_tree_version: CURRENT_STATE_TREE_VERSION,
            base_fee: TokenAmount::from_atto(0),
        }
    }
}

impl GenerationConfig {
    pub fn with_network_name(mut self, name: impl Into<String>) -> Self {
        self.network_name = name.into();
        self
    }
}
