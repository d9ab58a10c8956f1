// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Chain messages and their execution results.

use fvm_ipld_encoding::{to_vec, RawBytes};
use fvm_shared::address::Address;
use fvm_shared::econ::TokenAmount;
use fvm_shared::error::ExitCode;
use fvm_shared::message::Message;
use fvm_shared::MethodNum;
use serde::Serialize;

use crate::config::DEFAULT_GAS_LIMIT;
use crate::error::{Result, VectorError};

/// Builds the message applied by a vector.
///
/// Gas fee cap and premium are zero and the gas limit is fixed, so the only
/// inputs to the binary encoding are the arguments.
pub fn make_chain_message<P: Serialize>(
    from: Address,
    to: Address,
    nonce: u64,
    value: TokenAmount,
    method: MethodNum,
    params: &P,
) -> Result<Message> {
    let params = to_vec(params)
        .map(RawBytes::new)
        .map_err(|e| VectorError::EncodingFailure(format!("message params: {}", e)))?;
    Ok(Message {
        version: 0,
        from,
        to,
        sequence: nonce,
        value,
        method_num: method,
        params,
        gas_limit: DEFAULT_GAS_LIMIT,
        gas_fee_cap: TokenAmount::from_atto(0),
        gas_premium: TokenAmount::from_atto(0),
    })
}

/// Outcome of applying a message, as reported by the execution engine.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageResult {
    pub code: ExitCode,
    /// Binary encoding of the return value; empty when nothing was returned.
    pub ret: RawBytes,
    pub gas_charged: i64,
}

impl Default for MessageResult {
    fn default() -> Self {
        Self {
            code: ExitCode::OK,
            ret: RawBytes::default(),
            gas_charged: 0,
        }
    }
}

impl MessageResult {
    pub fn new(code: ExitCode, ret: RawBytes, gas_charged: i64) -> Self {
        Self { code, ret, gas_charged }
    }

    /// Result carrying a typed return value, encoded as DAG-CBOR.
    pub fn with_return<T: Serialize>(code: ExitCode, ret: &T, gas_charged: i64) -> Result<Self> {
        let ret = to_vec(ret)
            .map(RawBytes::new)
            .map_err(|e| VectorError::EncodingFailure(format!("return value: {}", e)))?;
        Ok(Self::new(code, ret, gas_charged))
    }
}
