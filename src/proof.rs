//! Vector Fingerprints.

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::schema::TestVectorSchema;
use crate::snapshot::blake3::hash_car_blocks;
use crate::snapshot::decode_car;

/// A compact BLAKE3 summary of a serialized vector.
///
/// Two generators that agree on a vector agree on every field here. The
/// snapshot is hashed after decompression, so a vector re-compressed by a
/// different gzip implementation keeps the same `car_hash`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VectorProof {
    pub vector_id: String,

    /// BLAKE3 of the decoded snapshot (roots and block stream).
    pub car_hash: String,

    /// BLAKE3 of the applied message bytes, in order.
    pub message_hash: String,

    /// BLAKE3 of every receipt's exit code, return bytes and gas.
    pub receipt_hash: String,

    pub start_root: Option<String>,
    pub end_root: Option<String>,
}

impl VectorProof {
    pub fn from_schema(schema: &TestVectorSchema) -> Result<Self> {
        let archive = decode_car(&schema.car)?;

        let mut messages = blake3::Hasher::new();
        for msg in &schema.apply_messages {
            messages.update(&(msg.bytes.len() as u64).to_le_bytes());
            messages.update(&msg.bytes);
        }

        let mut receipts = blake3::Hasher::new();
        for receipt in &schema.postconditions.receipts {
            receipts.update(&receipt.exit_code.to_le_bytes());
            receipts.update(&(receipt.return_value.len() as u64).to_le_bytes());
            receipts.update(&receipt.return_value);
            receipts.update(&receipt.gas_used.to_le_bytes());
        }

        Ok(Self {
            vector_id: schema.meta.id.clone(),
            car_hash: hex::encode(hash_car_blocks(&archive)),
            message_hash: hex::encode(messages.finalize().as_bytes()),
            receipt_hash: hex::encode(receipts.finalize().as_bytes()),
            start_root: schema.start_root().map(|c| c.to_string()),
            end_root: schema.end_root().map(|c| c.to_string()),
        })
    }

    /// Same content, regardless of the vector id.
    pub fn matches(&self, other: &VectorProof) -> bool {
        self.car_hash == other.car_hash
            && self.message_hash == other.message_hash
            && self.receipt_hash == other.receipt_hash
            && self.start_root == other.start_root
            && self.end_root == other.end_root
    }

    /// Single digest over every field except the id.
    pub fn digest(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(self.car_hash.as_bytes());
        hasher.update(self.message_hash.as_bytes());
        hasher.update(self.receipt_hash.as_bytes());
        update_root(&mut hasher, self.start_root.as_deref());
        update_root(&mut hasher, self.end_root.as_deref());
        hex::encode(hasher.finalize().as_bytes())
    }
}

// Presence byte, then length-prefixed text.
fn update_root(hasher: &mut blake3::Hasher, root: Option<&str>) {
    match root {
        Some(root) => {
            hasher.update(&[1]);
            hasher.update(&(root.len() as u64).to_le_bytes());
            hasher.update(root.as_bytes());
        }
        None => {
            hasher.update(&[0]);
        }
    }
}
