// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Protocol-level types shared by the capture pipeline.

pub mod codec;
pub mod actors;
pub mod message;

pub use actors::BuiltinActorCodes;
pub use codec::{cid_for, is_sector_commitment};
pub use message::{make_chain_message, MessageResult};
