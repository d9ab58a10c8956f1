// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Built-in actor code identifiers.
//!
//! Actor code of built-in actors is known to every conformant implementation,
//! so snapshots never embed it. A registry is a plain set of code CIDs.

use std::collections::BTreeSet;

use cid::multihash::Multihash;
use cid::Cid;

use crate::types::codec::{IDENTITY, RAW};

/// Actor names of the version 5 actor suite, in registration order.
pub const V5_ACTOR_NAMES: [&str; 11] = [
    "system",
    "init",
    "reward",
    "cron",
    "storagepower",
    "storageminer",
    "storagemarket",
    "paymentchannel",
    "multisig",
    "account",
    "verifiedregistry",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuiltinActorCodes {
    codes: BTreeSet<Cid>,
}

impl BuiltinActorCodes {
    /// Code CIDs of actors version 5: RAW codec over an identity multihash
    /// of `fil/5/<name>`.
    pub fn v5() -> Self {
        Self::from_cids(V5_ACTOR_NAMES.iter().filter_map(|name| code_cid(5, name)))
    }

    /// Registry over an explicit list, e.g. the entries of a bundle manifest.
    pub fn from_cids(cids: impl IntoIterator<Item = Cid>) -> Self {
        Self {
            codes: cids.into_iter().collect(),
        }
    }

    pub fn contains(&self, cid: &Cid) -> bool {
        self.codes.contains(cid)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cid> {
        self.codes.iter()
    }
}

/// Code CID of built-in actor `name` in actors `version`.
pub fn code_cid(version: u32, name: &str) -> Option<Cid> {
    let label = format!("fil/{}/{}", version, name);
    let hash = Multihash::<64>::wrap(IDENTITY, label.as_bytes()).ok()?;
    Some(Cid::new_v1(RAW, hash))
}
