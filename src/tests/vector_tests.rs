// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use fvm_shared::econ::TokenAmount;
use fvm_shared::error::ExitCode;
use fvm_shared::version::NetworkVersion;

use crate::config::GenerationConfig;
use crate::error::VectorError;
use crate::snapshot::decode_car;
use crate::state::{load_state_root, wrap};
use crate::tests::support::{ok_receipt, put_cbor, transfer_message, BrokenStore, FlakyStore, MockContext};
use crate::types::MessageResult;
use crate::vector::TestVectorBuilder;

#[test]
fn test_setters_overwrite() {
    let tv = TestVectorBuilder::new()
        .id("first")
        .epoch(1)
        .epoch(2)
        .id("second")
        .network_version(NetworkVersion::V12)
        .network_version(NetworkVersion::V13)
        .circ_supply(TokenAmount::from_atto(5))
        .receipt(ok_receipt(1))
        .receipt(MessageResult::new(ExitCode::new(16), Default::default(), 9))
        .build();

    assert_eq!(tv.id, "second");
    assert_eq!(tv.epoch, 2);
    assert_eq!(tv.network_version, NetworkVersion::V13);
    assert_eq!(tv.circ_supply, TokenAmount::from_atto(5));
    assert_eq!(tv.receipt.code, ExitCode::new(16));
    assert_eq!(tv.receipt.gas_charged, 9);
    assert!(tv.message.is_none());
    assert!(tv.start_state_tree.is_none());
}

#[test]
fn test_start_conditions_capture() {
    let (ctx, tree) = MockContext::new();

    let builder = TestVectorBuilder::new().start_conditions(&ctx, "t1").unwrap();
    let tv = builder.vector();

    assert_eq!(tv.id, "t1");
    assert_eq!(tv.epoch, 100);
    assert_eq!(tv.network_version, NetworkVersion::V13);
    assert_eq!(tv.circ_supply, TokenAmount::from_atto(1000));

    let wrapped = wrap(&ctx.store, &tree.root).unwrap();
    assert_eq!(tv.start_state_tree, Some(wrapped));

    let archive = decode_car(&tv.start_state).unwrap();
    assert_eq!(archive.roots, vec![wrapped]);
    // wrapped root, then info and the raw tree in link order
    let state = load_state_root(&ctx.store, &wrapped).unwrap();
    let cids: Vec<_> = archive.blocks.iter().map(|b| b.cid).collect();
    let mut expected = vec![wrapped];
    expected.extend(tree.walk_order());
    expected.push(state.info);
    assert_eq!(cids, expected);
}

#[test]
fn test_start_state_is_captured_at_call_time() {
    let (ctx, tree) = MockContext::new();

    let builder = TestVectorBuilder::new()
        .start_state(&ctx.store, &tree.root)
        .unwrap()
        .start_state_tree(&ctx.store, &tree.root)
        .unwrap();
    let before = builder.vector().start_state.clone();

    // Apply a "message": a new raw root reusing the old one.
    let next = put_cbor(&ctx.store, &("next", tree.root));
    let builder = builder.end_state_tree(&ctx.store, &next).unwrap();

    let tv = builder.build();
    assert_eq!(tv.start_state, before);
    assert_ne!(tv.start_state_tree, tv.end_state_tree);
    assert_eq!(tv.end_state_tree, Some(wrap(&ctx.store, &next).unwrap()));
}

#[test]
fn test_start_state_missing_root_fails() {
    let (ctx, _) = MockContext::new();
    let missing = crate::types::codec::cid_for(crate::types::codec::DAG_CBOR, b"gone");

    let err = TestVectorBuilder::new().start_state(&ctx.store, &missing).unwrap_err();
    assert!(matches!(err, VectorError::NotFound(c) if c == missing));
}

#[test]
fn test_config_version_is_used() {
    let (ctx, tree) = MockContext::new();
    let config = GenerationConfig {
        state_tree_version: 1,
        ..GenerationConfig::default()
    };

    let tv = TestVectorBuilder::with_config(config)
        .start_state_tree(&ctx.store, &tree.root)
        .unwrap()
        .message(transfer_message())
        .build();
    let root = tv.start_state_tree.unwrap();
    assert_eq!(load_state_root(&ctx.store, &root).unwrap().version, 1);
    assert_eq!(tv.message, Some(transfer_message()));
}

#[test]
fn test_failed_capture_leaves_builder_untouched() {
    let (ctx, tree) = MockContext::new();
    let builder = TestVectorBuilder::new().id("kept").epoch(7);

    let err = builder.clone().start_state(&BrokenStore, &tree.root).unwrap_err();
    assert!(matches!(err, VectorError::StoreWrite(_)));

    // Reads fail only after the wrapper has been written.
    let flaky = FlakyStore { inner: ctx.store, broken: tree.leaf_b };
    let err = builder.clone().start_state(&flaky, &tree.root).unwrap_err();
    assert!(matches!(err, VectorError::StoreRead { cid, .. } if cid == tree.leaf_b));

    let tv = builder.vector();
    assert!(tv.start_state.is_empty());
    assert_eq!(tv.id, "kept");
    assert_eq!(tv.epoch, 7);
}
