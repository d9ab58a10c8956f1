// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Content Store Adapter.
//!
//! Narrows an arbitrary [`Blockstore`] to the block capabilities the DAG
//! walker and the CAR codec need. The underlying store is treated as
//! append-only: deletion and key enumeration are refused outright.

use cid::Cid;
use fvm_ipld_blockstore::Blockstore;

use crate::error::{Result, VectorError};
use crate::types::codec::cid_for;

/// A block: content identifier plus the exact bytes it names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub cid: Cid,
    pub data: Vec<u8>,
}

impl Block {
    pub fn new(cid: Cid, data: Vec<u8>) -> Self {
        Self { cid, data }
    }
}

/// Result of probing the store without conflating failures with absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Present,
    Absent,
    /// The store failed to answer.
    Unknown,
}

/// Block capabilities required by traversal and archive code.
pub trait DagStore {
    /// Fetches a block; a missing key is [`VectorError::NotFound`].
    fn get(&self, cid: &Cid) -> Result<Block>;

    fn get_size(&self, cid: &Cid) -> Result<usize> {
        self.get(cid).map(|b| b.data.len())
    }

    /// Content-addresses `data` under `codec` and stores it. Idempotent.
    fn put(&self, codec: u64, data: &[u8]) -> Result<Cid>;

    /// Stores a block under the identifier it already carries.
    fn put_block(&self, block: &Block) -> Result<()>;

    fn put_many(&self, blocks: &[Block]) -> Result<()> {
        for block in blocks {
            self.put_block(block)?;
        }
        Ok(())
    }

    /// True iff `get` succeeds. Every failure, transient or not, reads as absent.
    fn has(&self, cid: &Cid) -> bool {
        self.get(cid).is_ok()
    }

    fn presence(&self, cid: &Cid) -> Presence {
        match self.get(cid) {
            Ok(_) => Presence::Present,
            Err(VectorError::NotFound(_)) => Presence::Absent,
            Err(_) => Presence::Unknown,
        }
    }

    fn delete(&self, cid: &Cid) -> Result<()> {
        Err(VectorError::UnsupportedOperation(format!("cannot delete cid: {}", cid)))
    }

    fn all_keys(&self) -> Result<Vec<Cid>> {
        Err(VectorError::UnsupportedOperation("key enumeration".to_string()))
    }
}

/// [`DagStore`] view over a borrowed [`Blockstore`].
pub struct StoreAdapter<'a, BS> {
    store: &'a BS,
}

impl<'a, BS: Blockstore> StoreAdapter<'a, BS> {
    pub fn new(store: &'a BS) -> Self {
        Self { store }
    }

    pub fn inner(&self) -> &'a BS {
        self.store
    }
}

impl<'a, BS: Blockstore> DagStore for StoreAdapter<'a, BS> {
    fn get(&self, cid: &Cid) -> Result<Block> {
        match self.store.get(cid) {
            Ok(Some(data)) => Ok(Block::new(*cid, data)),
            Ok(None) => Err(VectorError::NotFound(*cid)),
            Err(e) => Err(VectorError::StoreRead {
                cid: *cid,
                reason: e.to_string(),
            }),
        }
    }

    fn put(&self, codec: u64, data: &[u8]) -> Result<Cid> {
        let cid = cid_for(codec, data);
        self.store
            .put_keyed(&cid, data)
            .map_err(|e| VectorError::StoreWrite(e.to_string()))?;
        Ok(cid)
    }

    fn put_block(&self, block: &Block) -> Result<()> {
        self.store
            .put_keyed(&block.cid, &block.data)
            .map_err(|e| VectorError::StoreWrite(e.to_string()))
    }
}
