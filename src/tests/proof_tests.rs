// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::io::{Read, Write};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::proof::VectorProof;
use crate::schema::TestVectorSchema;
use crate::tests::support::{ok_receipt, transfer_message, MockContext};
use crate::vector::TestVectorBuilder;

fn schema(id: &str, gas: i64) -> TestVectorSchema {
    let (ctx, _) = MockContext::new();
    TestVectorBuilder::new()
        .start_conditions(&ctx, id)
        .unwrap()
        .message(transfer_message())
        .receipt(ok_receipt(gas))
        .finalize()
        .unwrap()
}

#[test]
fn test_proof_ignores_vector_id() {
    let a = VectorProof::from_schema(&schema("one", 500)).unwrap();
    let b = VectorProof::from_schema(&schema("two", 500)).unwrap();

    assert_ne!(a, b);
    assert!(a.matches(&b));
    assert_eq!(a.digest(), b.digest());
    assert_eq!(a.car_hash.len(), 64);
}

#[test]
fn test_proof_detects_receipt_drift() {
    let a = VectorProof::from_schema(&schema("t", 500)).unwrap();
    let b = VectorProof::from_schema(&schema("t", 501)).unwrap();

    assert_eq!(a.car_hash, b.car_hash);
    assert_ne!(a.receipt_hash, b.receipt_hash);
    assert!(!a.matches(&b));
    assert_ne!(a.digest(), b.digest());
}

#[test]
fn test_proof_survives_recompression() {
    let original = schema("t", 500);

    let mut raw = Vec::new();
    GzDecoder::new(original.car.as_slice()).read_to_end(&mut raw).unwrap();
    let mut gz = GzEncoder::new(Vec::new(), Compression::none());
    gz.write_all(&raw).unwrap();

    let mut recompressed = original.clone();
    recompressed.car = gz.finish().unwrap();
    assert_ne!(recompressed.car, original.car);

    let a = VectorProof::from_schema(&original).unwrap();
    let b = VectorProof::from_schema(&recompressed).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_proof_rejects_corrupt_car() {
    let mut broken = schema("t", 500);
    broken.car.truncate(10);
    assert!(VectorProof::from_schema(&broken).is_err());
}

#[test]
fn test_digest_distinguishes_missing_roots() {
    let base = VectorProof::from_schema(&schema("t", 500)).unwrap();
    let root = base.start_root.clone().unwrap();

    let start_only = VectorProof { start_root: Some(root.clone()), end_root: None, ..base.clone() };
    let end_only = VectorProof { start_root: None, end_root: Some(root), ..base };

    assert!(!start_only.matches(&end_only));
    assert_ne!(start_only.digest(), end_only.digest());
}
