//! Error types for the Side bridge contract

use common::BridgeError;
use cosmwasm_std::StdError;
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
    // Pair Errors
    // ========================================================================

    #[error("Swap pair already exists for {main_asset}")]
    DuplicatePair { main_asset: String },

    #[error("No swap pair for asset: {asset}")]
    NoPairForAsset { asset: String },

    // ========================================================================
    // Swap Errors
    // ========================================================================

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    // ========================================================================
    // Reply Errors
    // ========================================================================

    #[error("Unknown reply id: {id}")]
    UnknownReplyId { id: u64 },

    #[error("Wrapped token instantiation did not report a contract address")]
    MissingWrappedAddress,

    // ========================================================================
    // Migration Errors
    // ========================================================================

    #[error("Cannot migrate from {from}")]
    InvalidMigration { from: String },
}
