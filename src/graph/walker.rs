// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Deterministic DAG walk.

use cid::Cid;
use rustc_hash::FxHashSet;

use crate::error::Result;
use crate::graph::filter::LinkFilter;
use crate::graph::links::block_links;
use crate::storage::{Block, DagStore};

/// Walks the DAG below a set of roots, visiting every reachable block once.
///
/// Visit order is pre-order depth first, children in the order their links
/// are stored in the parent. Content-addressed graphs are acyclic, so the
/// seen-set only deduplicates shared subtrees.
pub struct DagWalker<'a, S, F> {
    store: &'a S,
    filter: &'a F,
}

impl<'a, S: DagStore, F: LinkFilter> DagWalker<'a, S, F> {
    pub fn new(store: &'a S, filter: &'a F) -> Self {
        Self { store, filter }
    }

    /// Calls `visit` on each block in walk order and returns how many were
    /// visited. Roots are always visited; only links pass through the filter.
    /// The first store or decode failure aborts the walk.
    pub fn walk<V>(&self, roots: &[Cid], mut visit: V) -> Result<usize>
    where
        V: FnMut(&Block) -> Result<()>,
    {
        let mut seen: FxHashSet<Cid> = FxHashSet::default();
        let mut stack: Vec<Cid> = roots.iter().rev().copied().collect();
        let mut visited = 0;

        while let Some(cid) = stack.pop() {
            if !seen.insert(cid) {
                continue;
            }
            let block = self.store.get(&cid)?;
            visit(&block)?;
            visited += 1;

            let links = block_links(&block)?;
            for link in links.iter().rev() {
                if self.filter.include(link) && !seen.contains(link) {
                    stack.push(*link);
                }
            }
        }

        Ok(visited)
    }

    /// Collects the visited blocks in walk order.
    pub fn collect(&self, roots: &[Cid]) -> Result<Vec<Block>> {
        let mut blocks = Vec::new();
        self.walk(roots, |block| {
            blocks.push(block.clone());
            Ok(())
        })?;
        Ok(blocks)
    }
}
