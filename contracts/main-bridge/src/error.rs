//! Error types for the Main bridge contract

use common::BridgeError;
use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    /// Relayer gate, replay protection, asset identity and metadata checks
    #[error("{0}")]
    Bridge(#[from] BridgeError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only admin can perform this action")]
    Unauthorized,

    // ========================================================================
    // Registry Errors
    // ========================================================================

    #[error("Asset already registered: {asset}")]
    AlreadyRegistered { asset: String },

    #[error("Not a token contract: {asset}")]
    NotAContract { asset: String },

    #[error("Asset not registered: {asset}")]
    NotRegistered { asset: String },

    // ========================================================================
    // Swap Errors
    // ========================================================================

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Insufficient escrow: holding {escrowed}, requested {requested}")]
    InsufficientEscrow {
        escrowed: Uint128,
        requested: Uint128,
    },

    // ========================================================================
    // Migration Errors
    // ========================================================================

    #[error("Cannot migrate from {from}")]
    InvalidMigration { from: String },
}
