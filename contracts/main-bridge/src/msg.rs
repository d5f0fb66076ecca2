//! Message types for the Main bridge contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    /// Admin address for relayer management
    pub admin: String,
    /// Initial relayer allow-list
    pub relayers: Vec<String>,
    /// Restrict fulfillment to the relayer allow-list
    pub permissioned: bool,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    /// Register a CW20 asset for bridging to the Side ledger
    ///
    /// Authorization: Anyone
    ///
    /// Probes the asset's name/symbol/decimals and emits them so the Side
    /// bridge can create a matching wrapped token.
    RegisterSwapPairToSide { asset: String },

    /// Escrow `amount` of `asset` for minting on the Side ledger
    ///
    /// The caller must have approved this contract for at least `amount`.
    /// The response data is the 32-byte transaction identifier.
    SwapMain2Side {
        asset: String,
        amount: Uint128,
        /// Recipient on the Side ledger (defaults to the sender)
        recipient: Option<String>,
    },

    /// Escrow via CW20 `Send` (alternative to approve + transfer-from)
    Receive(cw20::Cw20ReceiveMsg),

    /// Release escrow for a burn relayed from the Side ledger
    ///
    /// Authorization: Anyone, or relayers only when permissioned
    FillSide2MainSwap {
        /// 32-byte identifier of the Side burn transaction
        source_tx_id: Binary,
        asset: String,
        recipient: String,
        amount: Uint128,
    },

    // ========================================================================
    // Admin
    // ========================================================================
    AddRelayer { relayer: String },
    RemoveRelayer { relayer: String },
    SetPermissioned { permissioned: bool },
    TransferAdmin { new_admin: String },
}

/// Messages embedded in a CW20 `Send` to this contract
#[cw_serde]
pub enum ReceiveMsg {
    SwapMain2Side { recipient: Option<String> },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(bool)]
    IsRegistered { asset: String },

    #[returns(RegisteredAssetResponse)]
    RegisteredAsset { asset: String },

    #[returns(RegisteredAssetsResponse)]
    RegisteredAssets {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    #[returns(EscrowBalanceResponse)]
    EscrowBalance { asset: String },

    #[returns(IsFilledResponse)]
    IsFilled { source_tx_id: Binary },

    /// Nonce the next Main → Side swap will carry
    #[returns(NonceResponse)]
    CurrentNonce {},

    #[returns(RelayersResponse)]
    Relayers {},
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub permissioned: bool,
}

#[cw_serde]
pub struct RegisteredAssetResponse {
    pub asset: Addr,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

#[cw_serde]
pub struct RegisteredAssetsResponse {
    pub assets: Vec<RegisteredAssetResponse>,
}

#[cw_serde]
pub struct EscrowBalanceResponse {
    pub asset: Addr,
    pub balance: Uint128,
    pub total_escrowed: Uint128,
    pub total_released: Uint128,
}

#[cw_serde]
pub struct IsFilledResponse {
    pub filled: bool,
    /// Block height of the fill, if filled
    pub filled_at: Option<u64>,
}

#[cw_serde]
pub struct NonceResponse {
    pub nonce: u64,
}

#[cw_serde]
pub struct RelayersResponse {
    pub relayers: Vec<Addr>,
}
