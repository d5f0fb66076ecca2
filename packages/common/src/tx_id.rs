//! Transaction identifiers for cross-ledger swap fulfillment.
//!
//! A contract cannot see the hash of the transaction executing it, so the
//! initiating bridge derives a 32-byte identifier from what the ledger does
//! expose: chain id, bridge contract, block height and the transaction's
//! index in the block. The swap kind and the per-direction nonce separate
//! several swap messages packed into one multi-message transaction.
//!
//! # Byte Layout
//! - chain_id length (u16, big-endian) followed by the chain_id bytes
//! - contract address length (u16, big-endian) followed by its bytes
//! - block height (u64, big-endian)
//! - transaction index (u32, big-endian)
//! - kind (1 byte, see [`TxKind`])
//! - nonce (u64, big-endian)
//!
//! The fulfilling bridge never recomputes this value; it only checks that a
//! given 32-byte identifier has not been consumed before.

use cosmwasm_std::{Addr, Env, StdError, StdResult};
use tiny_keccak::{Hasher, Keccak};

/// Which bridge action produced a transaction identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum TxKind {
    /// Asset registration on Main
    Register = 0,
    /// Escrow on Main, fulfilled by a mint on Side
    Main2Side = 1,
    /// Burn on Side, fulfilled by a release on Main
    Side2Main = 2,
}

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Compute the identifier for a bridge action from explicit ledger coordinates.
pub fn compute_tx_id(
    chain_id: &str,
    contract: &Addr,
    height: u64,
    tx_index: u32,
    kind: TxKind,
    nonce: u64,
) -> [u8; 32] {
    let chain = chain_id.as_bytes();
    let contract = contract.as_bytes();

    let mut data = Vec::with_capacity(2 + chain.len() + 2 + contract.len() + 8 + 4 + 1 + 8);
    data.extend_from_slice(&(chain.len() as u16).to_be_bytes());
    data.extend_from_slice(chain);
    data.extend_from_slice(&(contract.len() as u16).to_be_bytes());
    data.extend_from_slice(contract);
    data.extend_from_slice(&height.to_be_bytes());
    data.extend_from_slice(&tx_index.to_be_bytes());
    data.push(kind as u8);
    data.extend_from_slice(&nonce.to_be_bytes());

    keccak256(&data)
}

/// Identifier of the transaction currently executing `env`'s contract.
///
/// Outside of a transaction (e.g. sudo or begin-block calls) the index is
/// taken as zero.
pub fn transaction_id(env: &Env, kind: TxKind, nonce: u64) -> [u8; 32] {
    let tx_index = env.transaction.as_ref().map(|t| t.index).unwrap_or(0);
    compute_tx_id(
        &env.block.chain_id,
        &env.contract.address,
        env.block.height,
        tx_index,
        kind,
        nonce,
    )
}

/// Convert 32 bytes to a 0x-prefixed lowercase hex string
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Parse a hex string (with or without 0x prefix) into 32 bytes
pub fn hex_to_bytes32(hex_str: &str) -> StdResult<[u8; 32]> {
    let stripped = hex_str.strip_prefix("0x").unwrap_or(hex_str);
    let bytes = hex::decode(stripped)
        .map_err(|e| StdError::generic_err(format!("Invalid hex: {}", e)))?;
    bytes.try_into().map_err(|v: Vec<u8>| {
        StdError::generic_err(format!("Expected 32 bytes, got {}", v.len()))
    })
}
