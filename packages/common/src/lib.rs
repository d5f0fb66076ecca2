//! Common - Shared Types and Utilities for the Swap Bridge Contracts
//!
//! Used by both bridge contracts:
//! - `asset` - CW20 metadata probing and validation, Main asset identities
//! - `tx_id` - transaction identifiers that key swap fulfillment
//! - `filled` - the consumed-identifier set
//! - `relayers` - the optional relayer allow-list
//! - `error` - rejections both bridges share

pub mod asset;
pub mod error;
pub mod filled;
pub mod relayers;
pub mod tx_id;

pub use asset::{query_token_metadata, validate_main_asset, TokenMetadata};
pub use error::BridgeError;
pub use tx_id::{bytes32_to_hex, hex_to_bytes32, keccak256, transaction_id, TxKind};
