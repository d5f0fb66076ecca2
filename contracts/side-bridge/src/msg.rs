//! Message types for the Side bridge contract

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
    /// Restrict pair creation and fulfillment to the relayer allow-list
    pub permissioned: bool,
    /// Stored code id of the wrapped token contract
    pub wrapped_token_code_id: u64,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    /// Create the wrapped counterpart of a registered Main asset
    ///
    /// Authorization: Anyone, or relayers only when permissioned
    ///
    /// `proof_tx_id` is the Main registration's identifier, kept for audit.
    /// Duplicates are rejected on `main_asset`, not on the identifier.
    CreateSwapPair {
        proof_tx_id: Binary,
        main_asset: String,
        name: String,
        symbol: String,
        decimals: u8,
    },

    /// Mint wrapped tokens for an escrow relayed from the Main ledger
    ///
    /// Authorization: Anyone, or relayers only when permissioned
    FillMain2SideSwap {
        /// 32-byte identifier of the Main escrow transaction
        source_tx_id: Binary,
        main_asset: String,
        recipient: String,
        amount: Uint128,
    },

    /// Burn `amount` of a wrapped token for release on the Main ledger
    ///
    /// The caller must have approved this contract for at least `amount`.
    /// The response data is the 32-byte transaction identifier.
    SwapSide2Main {
        wrapped_asset: String,
        amount: Uint128,
        /// Recipient on the Main ledger (defaults to the sender)
        recipient: Option<String>,
    },

    /// Burn via CW20 `Send` (alternative to approve + transfer-from)
    Receive(cw20::Cw20ReceiveMsg),

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
    SwapSide2Main { recipient: Option<String> },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(PairResponse)]
    Pair { main_asset: String },

    #[returns(PairResponse)]
    PairByWrapped { wrapped_asset: String },

    /// Wrapped counterpart of a Main asset, if paired
    #[returns(Option<Addr>)]
    SideOf { main_asset: String },

    /// Main asset behind a wrapped token, if it is one
    #[returns(Option<String>)]
    MainOf { wrapped_asset: String },

    #[returns(PairsResponse)]
    Pairs {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    #[returns(SupplyResponse)]
    Supply { main_asset: String },

    #[returns(IsFilledResponse)]
    IsFilled { source_tx_id: Binary },

    /// Nonce the next Side → Main swap will carry
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
    pub wrapped_token_code_id: u64,
}

#[cw_serde]
pub struct PairResponse {
    pub main_asset: String,
    pub wrapped_asset: Addr,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub proof_tx_id: Binary,
}

#[cw_serde]
pub struct PairsResponse {
    pub pairs: Vec<PairResponse>,
}

#[cw_serde]
pub struct SupplyResponse {
    pub main_asset: String,
    pub wrapped_asset: Addr,
    pub total_minted: Uint128,
    pub total_burned: Uint128,
    /// `total_minted - total_burned`
    pub outstanding: Uint128,
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
