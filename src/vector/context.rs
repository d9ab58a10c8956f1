// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Execution context seam.

use cid::Cid;
use fvm_ipld_blockstore::Blockstore;
use fvm_shared::clock::ChainEpoch;
use fvm_shared::econ::TokenAmount;
use fvm_shared::version::NetworkVersion;

/// The live values an execution engine exposes at a point in time.
pub trait ExecutionContext {
    type Store: Blockstore;

    fn epoch(&self) -> ChainEpoch;

    fn circulating_supply(&self) -> TokenAmount;

    fn network_version(&self) -> NetworkVersion;

    /// Root of the raw actors tree, before wrapping.
    fn state_root(&self) -> Cid;

    fn store(&self) -> &Self::Store;
}
