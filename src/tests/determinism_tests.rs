// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Independent generators with identical inputs must agree byte for byte.

use fvm_ipld_blockstore::MemoryBlockstore;

use crate::config::GenerationConfig;
use crate::tests::support::{ok_receipt, put_cbor, put_raw, transfer_message, MockContext, ToyTree};
use crate::vector::{TestVectorBuilder, TestVector};
use crate::ExecutionContext;

fn generate(ctx: &MockContext, config: GenerationConfig) -> String {
    let next = put_cbor(ctx.store(), &("after", ctx.state_root()));
    TestVectorBuilder::with_config(config)
        .start_conditions(ctx, "det")
        .unwrap()
        .message(transfer_message())
        .receipt(ok_receipt(321))
        .end_state_tree(ctx.store(), &next)
        .unwrap()
        .to_json()
        .unwrap()
}

#[test]
fn test_two_runs_identical() {
    let (a, _) = MockContext::new();
    let (b, _) = MockContext::new();
    assert_eq!(
        generate(&a, GenerationConfig::default()),
        generate(&b, GenerationConfig::default())
    );
}

#[test]
fn test_unreachable_blocks_ignored() {
    let (a, _) = MockContext::new();

    // Same tree, built after unrelated garbage landed in the store.
    let store = MemoryBlockstore::new();
    put_raw(&store, b"noise");
    put_cbor(&store, &("orphan", 1u64));
    let tree = ToyTree::build(&store);
    let (defaults, _) = MockContext::new();
    let b = MockContext {
        store,
        root: tree.root,
        ..defaults
    };

    assert_eq!(
        generate(&a, GenerationConfig::default()),
        generate(&b, GenerationConfig::default())
    );
}

#[test]
fn test_network_name_only_changes_variant() {
    let (a, _) = MockContext::new();
    let (b, _) = MockContext::new();

    let default: serde_json::Value =
        serde_json::from_str(&generate(&a, GenerationConfig::default())).unwrap();
    let mut renamed: serde_json::Value = serde_json::from_str(&generate(
        &b,
        GenerationConfig::default().with_network_name("calibnet"),
    ))
    .unwrap();

    assert_eq!(renamed["preconditions"]["variants"][0]["id"], "calibnet");
    renamed["preconditions"]["variants"][0]["id"] = default["preconditions"]["variants"][0]["id"].clone();
    assert_eq!(default, renamed);
}

#[test]
fn test_built_vector_fields_stable() {
    let (a, _) = MockContext::new();
    let build = |ctx: &MockContext| -> TestVector {
        TestVectorBuilder::new().start_conditions(ctx, "x").unwrap().build()
    };
    let first = build(&a);
    let second = build(&a);
    assert_eq!(first.start_state, second.start_state);
    assert_eq!(first.start_state_tree, second.start_state_tree);
}
