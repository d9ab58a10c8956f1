// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::error::{PersistenceError, Result};
use crate::vector_file;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use cid::Cid;
use fvm_ipld_blockstore::MemoryBlockstore;
use fvm_ipld_encoding::tuple::{Deserialize_tuple, Serialize_tuple};
use fvm_ipld_encoding::to_vec;
use fvm_shared::address::Address;
use fvm_shared::clock::ChainEpoch;
use fvm_shared::econ::TokenAmount;
use fvm_shared::error::ExitCode;
use fvm_shared::message::Message;
use fvm_shared::version::NetworkVersion;
use serde::Serialize;
use tracing::debug;
use vecgen_kernel::storage::{DagStore, StoreAdapter};
use vecgen_kernel::types::actors::code_cid;
use vecgen_kernel::types::codec::{cid_for, DAG_CBOR, FIL_COMMITMENT_SEALED, RAW};
use vecgen_kernel::types::{make_chain_message, MessageResult};
use vecgen_kernel::{ExecutionContext, GenerationConfig, TestVectorBuilder, TestVectorSchema};

pub const GENESIS_EPOCH: ChainEpoch = 100;
pub const SENDER: u64 = 100;
pub const RECEIVER: u64 = 101;
pub const MINER: u64 = 1000;
pub const SENDER_BALANCE: u64 = 1_000_000;
pub const TRANSFER_VALUE: u64 = 1_000;

/// Gas charged for a successful transfer.
pub const TRANSFER_GAS: i64 = 1_500;
/// Gas charged when the message is rejected before any transfer.
pub const REJECTED_GAS: i64 = 500;

const METHOD_SEND: u64 = 0;

/// One row of the actor table.
#[derive(Debug, Clone, PartialEq, Serialize_tuple, Deserialize_tuple)]
pub struct ActorState {
    pub id: u64,
    pub code: Cid,
    pub head: Cid,
    pub nonce: u64,
    pub balance: TokenAmount,
}

/// Minimal value-transfer machine over an in-memory store.
///
/// The raw state root is a DAG-CBOR array of [`ActorState`] rows ordered by
/// id. The miner's head links a sealed sector commitment and a raw metadata
/// block, so captured snapshots exercise the link filter.
pub struct ToyVm {
    store: MemoryBlockstore,
    actors: BTreeMap<u64, ActorState>,
    root: Cid,
    epoch: ChainEpoch,
    network_version: NetworkVersion,
}

impl ToyVm {
    pub fn genesis(epoch: ChainEpoch, network_version: NetworkVersion) -> Result<Self> {
        let mut vm = Self {
            store: MemoryBlockstore::new(),
            actors: BTreeMap::new(),
            root: cid_for(DAG_CBOR, &[0x80]),
            epoch,
            network_version,
        };

        vm.create_account(SENDER, TokenAmount::from_atto(SENDER_BALANCE))?;
        vm.create_account(RECEIVER, TokenAmount::from_atto(0))?;

        let adapter = StoreAdapter::new(&vm.store);
        let metadata = adapter.put(RAW, b"miner sector metadata")?;
        let comm_r = cid_for(FIL_COMMITMENT_SEALED, b"sector 0 replica");
        let head = put_cbor(&vm.store, &("sectors", comm_r, metadata))?;
        vm.actors.insert(
            MINER,
            ActorState {
                id: MINER,
                code: builtin_code("storageminer")?,
                head,
                nonce: 0,
                balance: TokenAmount::from_atto(0),
            },
        );

        vm.flush()?;
        Ok(vm)
    }

    pub fn actor(&self, id: u64) -> Option<&ActorState> {
        self.actors.get(&id)
    }

    /// Applies a plain value transfer. Rejected messages leave state untouched.
    pub fn apply_transfer(&mut self, msg: &Message) -> Result<MessageResult> {
        let from = id_of(&msg.from)?;
        let to = id_of(&msg.to)?;

        let code = match self.actors.get(&from) {
            None => Some(ExitCode::SYS_SENDER_INVALID),
            Some(sender) if sender.nonce != msg.sequence => Some(ExitCode::SYS_SENDER_STATE_INVALID),
            Some(sender) if sender.balance < msg.value => Some(ExitCode::SYS_INSUFFICIENT_FUNDS),
            Some(_) => None,
        };
        if let Some(code) = code {
            debug!(from, to, exit = code.value(), "transfer rejected");
            return Ok(MessageResult::new(code, Default::default(), REJECTED_GAS));
        }

        if !self.actors.contains_key(&to) {
            self.create_account(to, TokenAmount::from_atto(0))?;
        }
        if let Some(sender) = self.actors.get_mut(&from) {
            sender.balance = &sender.balance - &msg.value;
            sender.nonce += 1;
        }
        if let Some(receiver) = self.actors.get_mut(&to) {
            receiver.balance = &receiver.balance + &msg.value;
        }

        self.flush()?;
        debug!(from, to, root = %self.root, "transfer applied");
        Ok(MessageResult::new(ExitCode::OK, Default::default(), TRANSFER_GAS))
    }

    fn create_account(&mut self, id: u64, balance: TokenAmount) -> Result<()> {
        let head = put_cbor(&self.store, &Address::new_id(id))?;
        self.actors.insert(
            id,
            ActorState {
                id,
                code: builtin_code("account")?,
                head,
                nonce: 0,
                balance,
            },
        );
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        let rows: Vec<&ActorState> = self.actors.values().collect();
        self.root = put_cbor(&self.store, &rows)?;
        Ok(())
    }
}

impl ExecutionContext for ToyVm {
    type Store = MemoryBlockstore;

    fn epoch(&self) -> ChainEpoch {
        self.epoch
    }

    fn circulating_supply(&self) -> TokenAmount {
        self.actors
            .values()
            .fold(TokenAmount::from_atto(0), |acc, a| &acc + &a.balance)
    }

    fn network_version(&self) -> NetworkVersion {
        self.network_version
    }

    fn state_root(&self) -> Cid {
        self.root
    }

    fn store(&self) -> &MemoryBlockstore {
        &self.store
    }
}

fn put_cbor<T: Serialize>(store: &MemoryBlockstore, obj: &T) -> Result<Cid> {
    let bytes = to_vec(obj).map_err(|e| PersistenceError::InvalidFormat(e.to_string()))?;
    Ok(StoreAdapter::new(store).put(DAG_CBOR, &bytes)?)
}

fn builtin_code(name: &str) -> Result<Cid> {
    code_cid(5, name).ok_or_else(|| PersistenceError::InvalidFormat(format!("no code cid for {}", name)))
}

fn id_of(addr: &Address) -> Result<u64> {
    addr.id()
        .map_err(|e| PersistenceError::InvalidFormat(format!("{}: {}", addr, e)))
}

/// Genesis, one transfer of `value` from [`SENDER`] to [`RECEIVER`], and the
/// resulting vector.
pub fn generate_transfer_vector(id: &str, value: u64, config: &GenerationConfig) -> Result<TestVectorSchema> {
    let mut vm = ToyVm::genesis(GENESIS_EPOCH, NetworkVersion::V13)?;

    let builder = TestVectorBuilder::with_config(config.clone()).start_conditions(&vm, id)?;

    let msg = make_chain_message(
        Address::new_id(SENDER),
        Address::new_id(RECEIVER),
        0,
        TokenAmount::from_atto(value),
        METHOD_SEND,
        &(),
    )?;
    let receipt = vm.apply_transfer(&msg)?;

    let end_root = vm.state_root();
    let builder = builder
        .message(msg)
        .receipt(receipt)
        .end_state_tree(vm.store(), &end_root)?;
    Ok(builder.finalize()?)
}

pub struct TestPaths {
    pub transfer: PathBuf,
    pub insufficient_funds: PathBuf,
}

/// Writes a successful and a rejected transfer vector into `dir`.
pub fn generate_test_scenario(dir: &Path) -> Result<TestPaths> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    let config = GenerationConfig::default();

    let transfer = dir.join("transfer-ok.json");
    let schema = generate_transfer_vector("transfer-ok", TRANSFER_VALUE, &config)?;
    vector_file::write_to(&transfer, &schema)?;

    let insufficient_funds = dir.join("transfer-insufficient-funds.json");
    let schema = generate_transfer_vector("transfer-insufficient-funds", SENDER_BALANCE + 1, &config)?;
    vector_file::write_to(&insufficient_funds, &schema)?;

    Ok(TestPaths {
        transfer,
        insufficient_funds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use vecgen_kernel::snapshot::decode_car;
    use vecgen_kernel::types::is_sector_commitment;

    #[test]
    fn test_transfer_moves_balance() {
        let mut vm = ToyVm::genesis(GENESIS_EPOCH, NetworkVersion::V13).unwrap();
        let before = vm.state_root();
        let supply = vm.circulating_supply();

        let msg = make_chain_message(
            Address::new_id(SENDER),
            Address::new_id(RECEIVER),
            0,
            TokenAmount::from_atto(250),
            METHOD_SEND,
            &(),
        )
        .unwrap();
        let res = vm.apply_transfer(&msg).unwrap();

        assert_eq!(res.code, ExitCode::OK);
        assert_eq!(res.gas_charged, TRANSFER_GAS);
        assert_ne!(vm.state_root(), before);
        assert_eq!(vm.actor(SENDER).unwrap().nonce, 1);
        assert_eq!(vm.actor(SENDER).unwrap().balance, TokenAmount::from_atto(SENDER_BALANCE - 250));
        assert_eq!(vm.actor(RECEIVER).unwrap().balance, TokenAmount::from_atto(250));
        assert_eq!(vm.circulating_supply(), supply);

        // Replaying the same nonce is rejected.
        let again = vm.apply_transfer(&msg).unwrap();
        assert_eq!(again.code, ExitCode::SYS_SENDER_STATE_INVALID);
        assert_eq!(again.gas_charged, REJECTED_GAS);
    }

    #[test]
    fn test_rejected_transfer_keeps_root() {
        let mut vm = ToyVm::genesis(GENESIS_EPOCH, NetworkVersion::V13).unwrap();
        let before = vm.state_root();

        let msg = make_chain_message(
            Address::new_id(SENDER),
            Address::new_id(RECEIVER),
            0,
            TokenAmount::from_atto(SENDER_BALANCE + 1),
            METHOD_SEND,
            &(),
        )
        .unwrap();
        let res = vm.apply_transfer(&msg).unwrap();
        assert_eq!(res.code, ExitCode::SYS_INSUFFICIENT_FUNDS);
        assert_eq!(vm.state_root(), before);

        let unknown = make_chain_message(
            Address::new_id(4242),
            Address::new_id(RECEIVER),
            0,
            TokenAmount::from_atto(1),
            METHOD_SEND,
            &(),
        )
        .unwrap();
        assert_eq!(vm.apply_transfer(&unknown).unwrap().code, ExitCode::SYS_SENDER_INVALID);
    }

    #[test]
    fn test_transfer_vector_is_reproducible() {
        let config = GenerationConfig::default();
        let a = generate_transfer_vector("t", TRANSFER_VALUE, &config).unwrap();
        let b = generate_transfer_vector("t", TRANSFER_VALUE, &config).unwrap();
        assert_eq!(a, b);
        assert_ne!(a.start_root(), a.end_root());

        // Snapshot excludes the commitment and actor code.
        let archive = decode_car(&a.car).unwrap();
        assert_eq!(archive.roots, vec![a.start_root().unwrap()]);
        for block in &archive.blocks {
            assert!(!is_sector_commitment(&block.cid));
            assert_ne!(block.cid.codec(), FIL_COMMITMENT_SEALED);
        }
        assert!(archive.blocks.iter().any(|b| b.cid.codec() == RAW));
    }

    #[test]
    fn test_fixture_generator() {
        let dir = tempdir().unwrap();
        let paths = generate_test_scenario(dir.path()).unwrap();

        assert!(paths.transfer.exists());
        assert!(paths.insufficient_funds.exists());

        let ok = vector_file::read_vector(&paths.transfer).unwrap();
        assert_eq!(ok.meta.id, "transfer-ok");
        assert_eq!(ok.postconditions.receipts[0].exit_code, 0);

        let failed = vector_file::read_vector(&paths.insufficient_funds).unwrap();
        assert_eq!(
            failed.postconditions.receipts[0].exit_code,
            i64::from(ExitCode::SYS_INSUFFICIENT_FUNDS.value())
        );
        // Rejected message leaves the tree as it was.
        assert_eq!(failed.start_root(), failed.end_root());
    }
}
