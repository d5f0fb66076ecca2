//! Consumed source transaction identifiers.
//!
//! Each bridge keeps its own set; an identifier is checked and inserted in
//! the same transaction as the mint or release it authorizes.

use cosmwasm_std::{Binary, StdError, StdResult, Storage};
use cw_storage_plus::Map;

use crate::error::BridgeError;
use crate::tx_id::bytes32_to_hex;

/// Key: 32-byte tx id, Value: block height at which it was filled
pub const FILLED_TXS: Map<&[u8], u64> = Map::new("filled_txs");

/// Parse a 32-byte transaction identifier from Binary input.
pub fn parse_tx_id(source_tx_id: &Binary) -> Result<[u8; 32], BridgeError> {
    source_tx_id
        .to_vec()
        .try_into()
        .map_err(|_| BridgeError::InvalidTxIdLength {
            got: source_tx_id.len(),
        })
}

pub fn ensure_not_filled(storage: &dyn Storage, tx_id: &[u8; 32]) -> Result<(), BridgeError> {
    if FILLED_TXS.has(storage, tx_id) {
        return Err(BridgeError::AlreadyFilled {
            tx_id: bytes32_to_hex(tx_id),
        });
    }
    Ok(())
}

pub fn mark_filled(storage: &mut dyn Storage, tx_id: &[u8; 32], height: u64) -> StdResult<()> {
    FILLED_TXS.save(storage, tx_id, &height)
}

/// Height at which `source_tx_id` was filled, if it was.
pub fn filled_at(storage: &dyn Storage, source_tx_id: &Binary) -> StdResult<Option<u64>> {
    let tx_id = parse_tx_id(source_tx_id).map_err(|e| StdError::generic_err(e.to_string()))?;
    FILLED_TXS.may_load(storage, &tx_id)
}
