// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Test-Vector Builder.
//!
//! Every setter writes exactly one field and a repeated call replaces the
//! earlier value. Setters that read the store capture it at call time: take
//! the start state before the message is applied and the end state after.

use cid::Cid;
use fvm_ipld_blockstore::Blockstore;
use fvm_shared::clock::ChainEpoch;
use fvm_shared::econ::TokenAmount;
use fvm_shared::message::Message;
use fvm_shared::version::NetworkVersion;
use tracing::debug;

use crate::config::GenerationConfig;
use crate::error::Result;
use crate::graph::SnapshotFilter;
use crate::schema::{self, TestVectorSchema};
use crate::snapshot::encode_car;
use crate::state::wrap_with_version;
use crate::storage::StoreAdapter;
use crate::types::MessageResult;
use crate::vector::ExecutionContext;

/// Accumulated vector fields. Never persisted directly; see [`schema`].
#[derive(Debug, Clone)]
pub struct TestVector {
    pub id: String,

    /// gzip(CAR) of the wrapped start state.
    pub start_state: Vec<u8>,
    pub start_state_tree: Option<Cid>,
    pub message: Option<Message>,

    pub receipt: MessageResult,
    pub end_state_tree: Option<Cid>,

    // Runtime values
    pub epoch: ChainEpoch,
    pub network_version: NetworkVersion,
    pub circ_supply: TokenAmount,
}

impl Default for TestVector {
    fn default() -> Self {
        Self {
            id: String::new(),
            start_state: Vec::new(),
            start_state_tree: None,
            message: None,
            receipt: MessageResult::default(),
            end_state_tree: None,
            epoch: 0,
            network_version: NetworkVersion::V0,
            circ_supply: TokenAmount::from_atto(0),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TestVectorBuilder {
    vector: TestVector,
    config: GenerationConfig,
    filter: SnapshotFilter,
}

impl TestVectorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GenerationConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Replaces the snapshot link filter (e.g. a registry built from a bundle).
    pub fn filter(mut self, filter: SnapshotFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.vector.id = id.into();
        self
    }

    pub fn epoch(mut self, epoch: ChainEpoch) -> Self {
        self.vector.epoch = epoch;
        self
    }

    pub fn network_version(mut self, nv: NetworkVersion) -> Self {
        self.vector.network_version = nv;
        self
    }

    pub fn circ_supply(mut self, supply: TokenAmount) -> Self {
        self.vector.circ_supply = supply;
        self
    }

    pub fn message(mut self, message: Message) -> Self {
        self.vector.message = Some(message);
        self
    }

    pub fn receipt(mut self, receipt: MessageResult) -> Self {
        self.vector.receipt = receipt;
        self
    }

    /// Captures the snapshot blob of the wrapped `raw_root` as it is in
    /// `store` right now.
    pub fn start_state<BS: Blockstore>(mut self, store: &BS, raw_root: &Cid) -> Result<Self> {
        let (_, car) = self.capture(store, raw_root)?;
        self.vector.start_state = car;
        Ok(self)
    }

    pub fn start_state_tree<BS: Blockstore>(mut self, store: &BS, raw_root: &Cid) -> Result<Self> {
        debug!(raw = %raw_root, "start state tree");
        let root = wrap_with_version(store, raw_root, self.config.state_tree_version)?;
        self.vector.start_state_tree = Some(root);
        Ok(self)
    }

    pub fn end_state_tree<BS: Blockstore>(mut self, store: &BS, raw_root: &Cid) -> Result<Self> {
        debug!(raw = %raw_root, "end state tree");
        let root = wrap_with_version(store, raw_root, self.config.state_tree_version)?;
        self.vector.end_state_tree = Some(root);
        Ok(self)
    }

    /// Sets every start condition from one reading of `ctx`: epoch,
    /// circulating supply, network version, wrapped start root, start
    /// snapshot and id.
    pub fn start_conditions<C: ExecutionContext>(mut self, ctx: &C, id: impl Into<String>) -> Result<Self> {
        let raw_root = ctx.state_root();
        let (root, car) = self.capture(ctx.store(), &raw_root)?;

        self.vector.epoch = ctx.epoch();
        self.vector.circ_supply = ctx.circulating_supply();
        self.vector.network_version = ctx.network_version();
        self.vector.start_state_tree = Some(root);
        self.vector.start_state = car;
        self.vector.id = id.into();
        Ok(self)
    }

    pub fn vector(&self) -> &TestVector {
        &self.vector
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn build(self) -> TestVector {
        self.vector
    }

    /// Renders the current fields to the external schema.
    pub fn finalize(&self) -> Result<TestVectorSchema> {
        schema::serialize(&self.vector, &self.config)
    }

    pub fn to_json(&self) -> Result<String> {
        schema::to_json(&self.vector, &self.config)
    }

    fn capture<BS: Blockstore>(&self, store: &BS, raw_root: &Cid) -> Result<(Cid, Vec<u8>)> {
        capture_snapshot(store, raw_root, self.config.state_tree_version, &self.filter)
    }
}

/// Wraps `raw_root` and encodes the snapshot of the wrapped root.
pub fn capture_snapshot<BS: Blockstore>(
    store: &BS,
    raw_root: &Cid,
    version: u64,
    filter: &SnapshotFilter,
) -> Result<(Cid, Vec<u8>)> {
    debug!(raw = %raw_root, "capturing state");
    let root = wrap_with_version(store, raw_root, version)?;
    let car = encode_car(&StoreAdapter::new(store), filter, &[root])?;
    Ok((root, car))
}
