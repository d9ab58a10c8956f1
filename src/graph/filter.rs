// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Link inclusion rules for portable snapshots.

use cid::Cid;

use crate::types::actors::BuiltinActorCodes;
use crate::types::codec::is_sector_commitment;

/// Decides whether the walker follows a link.
pub trait LinkFilter {
    fn include(&self, link: &Cid) -> bool;
}

impl<F: Fn(&Cid) -> bool> LinkFilter for F {
    fn include(&self, link: &Cid) -> bool {
        self(link)
    }
}

/// Follows every link.
#[derive(Debug, Clone, Copy, Default)]
pub struct IncludeAll;

impl LinkFilter for IncludeAll {
    fn include(&self, _link: &Cid) -> bool {
        true
    }
}

/// Default snapshot rule: drop sector commitments and built-in actor code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotFilter {
    builtin: BuiltinActorCodes,
}

impl SnapshotFilter {
    pub fn new(builtin: BuiltinActorCodes) -> Self {
        Self { builtin }
    }

    pub fn builtin_codes(&self) -> &BuiltinActorCodes {
        &self.builtin
    }
}

impl Default for SnapshotFilter {
    fn default() -> Self {
        Self::new(BuiltinActorCodes::v5())
    }
}

impl LinkFilter for SnapshotFilter {
    fn include(&self, link: &Cid) -> bool {
        !is_sector_commitment(link) && !self.builtin.contains(link)
    }
}
