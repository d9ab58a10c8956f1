// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! State-Root Wrapper.
//!
//! The protocol does not name a state by its raw actor tree. It names the
//! versioned top-level object
//! ```text
//! StateRoot [ version, actors, info ]
//! ```
//! stored as DAG-CBOR, where `info` points at a separately stored auxiliary
//! object (empty for every version so far).

use cid::Cid;
use fvm_ipld_blockstore::Blockstore;
use fvm_ipld_encoding::tuple::{Deserialize_tuple, Serialize_tuple};
use fvm_ipld_encoding::{from_slice, to_vec};
use serde::ser::{SerializeTuple, Serializer};
use serde::Serialize;
use tracing::debug;

use crate::config::CURRENT_STATE_TREE_VERSION;
use crate::error::{Result, VectorError};
use crate::storage::{DagStore, StoreAdapter};
use crate::types::codec::DAG_CBOR;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_tuple, Deserialize_tuple)]
pub struct StateRoot {
    /// State tree version.
    pub version: u64,
    /// Actors tree. The structure depends on the state root version.
    pub actors: Cid,
    /// Info. The structure depends on the state root version.
    pub info: Cid,
}

/// Auxiliary info object of versions 0 through 3: an empty tuple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StateInfo0;

impl Serialize for StateInfo0 {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_tuple(0)?.end()
    }
}

/// Wraps a raw actors root at [`CURRENT_STATE_TREE_VERSION`].
pub fn wrap<BS: Blockstore>(store: &BS, raw_root: &Cid) -> Result<Cid> {
    wrap_with_version(store, raw_root, CURRENT_STATE_TREE_VERSION)
}

/// Writes the info object and the top-level object, returning the canonical
/// root. Equal inputs always give the same identifier.
pub fn wrap_with_version<BS: Blockstore>(store: &BS, raw_root: &Cid, version: u64) -> Result<Cid> {
    let store = StoreAdapter::new(store);

    let info = put_cbor(&store, &StateInfo0)?;
    let root = StateRoot {
        version,
        actors: *raw_root,
        info,
    };
    let cid = put_cbor(&store, &root)?;
    debug!(raw = %raw_root, wrapped = %cid, version, "wrapped state root");
    Ok(cid)
}

/// Reads back a wrapped root.
pub fn load_state_root<BS: Blockstore>(store: &BS, root: &Cid) -> Result<StateRoot> {
    let block = StoreAdapter::new(store).get(root)?;
    from_slice(&block.data).map_err(|e| VectorError::Decode(format!("state root {}: {}", root, e)))
}

fn put_cbor<S: DagStore, T: Serialize>(store: &S, obj: &T) -> Result<Cid> {
    let bytes = to_vec(obj).map_err(|e| VectorError::EncodingFailure(e.to_string()))?;
    store.put(DAG_CBOR, &bytes)
}
