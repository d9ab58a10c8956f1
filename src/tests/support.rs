// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Shared fixtures: a small state DAG and an execution context over it.
#![allow(dead_code)]

use cid::Cid;
use fvm_ipld_blockstore::{Blockstore, MemoryBlockstore};
use fvm_ipld_encoding::to_vec;
use fvm_shared::address::Address;
use fvm_shared::clock::ChainEpoch;
use fvm_shared::econ::TokenAmount;
use fvm_shared::error::ExitCode;
use fvm_shared::message::Message;
use fvm_shared::version::NetworkVersion;
use multihash_codetable::MultihashDigest;
use serde::Serialize;

use crate::types::actors::code_cid;
use crate::types::codec::{cid_for, DAG_CBOR, DEFAULT_HASH, FIL_COMMITMENT_SEALED, RAW};
use crate::types::{make_chain_message, MessageResult};
use crate::vector::ExecutionContext;

pub fn put_cbor<T: Serialize>(store: &MemoryBlockstore, obj: &T) -> Cid {
    let bytes = to_vec(obj).unwrap();
    let cid = cid_for(DAG_CBOR, &bytes);
    store.put_keyed(&cid, &bytes).unwrap();
    cid
}

pub fn put_raw(store: &MemoryBlockstore, data: &[u8]) -> Cid {
    let cid = cid_for(RAW, data);
    store.put_keyed(&cid, data).unwrap();
    cid
}

/// Sealed commitment link; never stored.
pub fn commitment() -> Cid {
    Cid::new_v1(FIL_COMMITMENT_SEALED, DEFAULT_HASH.digest(b"comm-r"))
}

/// Layout:
/// ```text
/// root [code, leaf_a, leaf_b]
///   leaf_a ["a", shared, raw]
///   leaf_b ["b", shared, commitment]
/// ```
/// `code` is a v5 built-in actor code CID and is not stored either.
pub struct ToyTree {
    pub root: Cid,
    pub leaf_a: Cid,
    pub leaf_b: Cid,
    pub shared: Cid,
    pub raw: Cid,
    pub code: Cid,
    pub commitment: Cid,
}

impl ToyTree {
    pub fn build(store: &MemoryBlockstore) -> Self {
        let code = code_cid(5, "account").unwrap();
        let commitment = commitment();

        let raw = put_raw(store, b"opaque blob");
        let shared = put_cbor(store, &"shared");
        let leaf_a = put_cbor(store, &("a", shared, raw));
        let leaf_b = put_cbor(store, &("b", shared, commitment));
        let root = put_cbor(store, &(code, leaf_a, leaf_b));

        Self { root, leaf_a, leaf_b, shared, raw, code, commitment }
    }

    /// Stored walk order under the snapshot filter.
    pub fn walk_order(&self) -> Vec<Cid> {
        vec![self.root, self.leaf_a, self.shared, self.raw, self.leaf_b]
    }
}

pub struct MockContext {
    pub store: MemoryBlockstore,
    pub root: Cid,
    pub epoch: ChainEpoch,
    pub nv: NetworkVersion,
    pub supply: TokenAmount,
}

impl MockContext {
    pub fn new() -> (Self, ToyTree) {
        let store = MemoryBlockstore::new();
        let tree = ToyTree::build(&store);
        let ctx = Self {
            store,
            root: tree.root,
            epoch: 100,
            nv: NetworkVersion::V13,
            supply: TokenAmount::from_atto(1000),
        };
        (ctx, tree)
    }
}

impl ExecutionContext for MockContext {
    type Store = MemoryBlockstore;

    fn epoch(&self) -> ChainEpoch {
        self.epoch
    }

    fn circulating_supply(&self) -> TokenAmount {
        self.supply.clone()
    }

    fn network_version(&self) -> NetworkVersion {
        self.nv
    }

    fn state_root(&self) -> Cid {
        self.root
    }

    fn store(&self) -> &MemoryBlockstore {
        &self.store
    }
}

/// Message from A (id 100) to B (id 101), nonce 1.
pub fn transfer_message() -> Message {
    make_chain_message(
        Address::new_id(100),
        Address::new_id(101),
        1,
        TokenAmount::from_atto(10),
        0,
        &(),
    )
    .unwrap()
}

pub fn ok_receipt(gas: i64) -> MessageResult {
    MessageResult::new(ExitCode::OK, Default::default(), gas)
}

/// Blockstore whose every operation fails.
pub struct BrokenStore;

impl Blockstore for BrokenStore {
    fn get(&self, _k: &Cid) -> anyhow::Result<Option<Vec<u8>>> {
        Err(anyhow::anyhow!("device unavailable"))
    }

    fn put_keyed(&self, _k: &Cid, _block: &[u8]) -> anyhow::Result<()> {
        Err(anyhow::anyhow!("device unavailable"))
    }
}

/// Delegates to a memory store but fails every read of `broken`.
pub struct FlakyStore {
    pub inner: MemoryBlockstore,
    pub broken: Cid,
}

impl Blockstore for FlakyStore {
    fn get(&self, k: &Cid) -> anyhow::Result<Option<Vec<u8>>> {
        if *k == self.broken {
            return Err(anyhow::anyhow!("read error on {}", k));
        }
        self.inner.get(k)
    }

    fn put_keyed(&self, k: &Cid, block: &[u8]) -> anyhow::Result<()> {
        self.inner.put_keyed(k, block)
    }
}
