//! Rejections shared by both bridge contracts.

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum BridgeError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: caller is not a registered relayer")]
    UnauthorizedRelayer,

    #[error("Swap tx already filled: {tx_id}")]
    AlreadyFilled { tx_id: String },

    #[error("Invalid tx id length: expected 32 bytes, got {got}")]
    InvalidTxIdLength { got: usize },

    // ========================================================================
    // Asset Identity & Metadata
    // ========================================================================

    #[error("Main asset must not be empty")]
    EmptyMainAsset,

    #[error("Main asset must be lowercase without surrounding whitespace: {main_asset:?}")]
    NonCanonicalMainAsset { main_asset: String },

    #[error("Token name must be 3-50 characters: {name:?}")]
    InvalidTokenName { name: String },

    #[error("Token symbol must match [a-zA-Z-]{{3,12}}: {symbol:?}")]
    InvalidTokenSymbol { symbol: String },

    #[error("Token decimals must not exceed 18: {decimals}")]
    InvalidTokenDecimals { decimals: u8 },
}
