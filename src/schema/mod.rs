// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Schema Serializer.
//!
//! Maps a [`TestVector`] onto the JSON test-vector schema shared by every
//! implementation of the protocol. Field names, nesting and encodings are
//! fixed externally:
//! - bytes are standard base64 of the raw binary encoding,
//! - big integers are decimal strings,
//! - state roots are DAG-JSON links.

pub mod fields;

use cid::Cid;
use fvm_ipld_encoding::to_vec;
use fvm_shared::bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::config::{GenerationConfig, VECTOR_CLASS};
use crate::error::{Result, VectorError};
use crate::graph::links::scan_links;
use crate::vector::TestVector;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestVectorSchema {
    pub class: String,

    #[serde(rename = "_meta")]
    pub meta: Metadata,

    /// gzip(CAR) holding every object of the start state tree.
    #[serde(with = "fields::base64_bytes")]
    pub car: Vec<u8>,

    pub preconditions: Preconditions,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub apply_messages: Vec<MessageSerial>,

    pub postconditions: Postconditions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub id: String,
    pub gen: Vec<GenerationData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationData {
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    /// Usually the codename of the network upgrade.
    pub id: String,
    pub epoch: i64,
    #[serde(rename = "nv")]
    pub network_version: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preconditions {
    pub variants: Vec<Variant>,
    pub state_tree: StateTreeSerial,
    #[serde(with = "fields::decimal")]
    pub basefee: BigInt,
    #[serde(with = "fields::decimal")]
    pub circ_supply: BigInt,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateTreeSerial {
    #[serde(with = "fields::cid_link")]
    pub root_cid: Option<Cid>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageSerial {
    #[serde(with = "fields::base64_bytes")]
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptSerial {
    /// Interpreted by drivers as the protocol exit code.
    pub exit_code: i64,
    #[serde(rename = "return", with = "fields::base64_bytes")]
    pub return_value: Vec<u8>,
    pub gas_used: i64,
}

/// Expected state at the end of the vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Postconditions {
    pub state_tree: StateTreeSerial,
    pub receipts: Vec<ReceiptSerial>,
}

/// Renders `tv` without touching it. Fails if no message was set, or if the
/// receipt's return bytes are not a single DAG-CBOR item.
pub fn serialize(tv: &TestVector, config: &GenerationConfig) -> Result<TestVectorSchema> {
    let message = tv
        .message
        .as_ref()
        .ok_or_else(|| VectorError::EncodingFailure("vector has no message".to_string()))?;
    let message_bytes =
        to_vec(message).map_err(|e| VectorError::EncodingFailure(format!("message: {}", e)))?;

    let return_bytes = tv.receipt.ret.bytes().to_vec();
    if !return_bytes.is_empty() {
        scan_links(&return_bytes)
            .map_err(|e| VectorError::EncodingFailure(format!("return value: {}", e)))?;
    }

    Ok(TestVectorSchema {
        class: VECTOR_CLASS.to_string(),
        meta: Metadata {
            id: tv.id.clone(),
            gen: vec![GenerationData {
                source: config.generator_source.clone(),
            }],
        },
        car: tv.start_state.clone(),
        preconditions: Preconditions {
            variants: vec![Variant {
                id: config.network_name.clone(),
                epoch: tv.epoch,
                network_version: u32::from(tv.network_version),
            }],
            state_tree: StateTreeSerial {
                root_cid: tv.start_state_tree,
            },
            basefee: config.base_fee.atto().clone(),
            circ_supply: tv.circ_supply.atto().clone(),
        },
        apply_messages: vec![MessageSerial { bytes: message_bytes }],
        postconditions: Postconditions {
            state_tree: StateTreeSerial {
                root_cid: tv.end_state_tree,
            },
            receipts: vec![ReceiptSerial {
                exit_code: i64::from(tv.receipt.code.value()),
                return_value: return_bytes,
                gas_used: tv.receipt.gas_charged,
            }],
        },
    })
}

/// Canonical JSON of `tv`.
pub fn to_json(tv: &TestVector, config: &GenerationConfig) -> Result<String> {
    let schema = serialize(tv, config)?;
    serde_json::to_string(&schema).map_err(|e| VectorError::EncodingFailure(e.to_string()))
}

impl TestVectorSchema {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| VectorError::Decode(format!("vector json: {}", e)))
    }

    pub fn start_root(&self) -> Option<Cid> {
        self.preconditions.state_tree.root_cid
    }

    pub fn end_root(&self) -> Option<Cid> {
        self.postconditions.state_tree.root_cid
    }
}
