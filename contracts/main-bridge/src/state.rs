//! State definitions for the Main bridge contract

use common::TokenMetadata;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Admin address for relayer management
    pub admin: Addr,
    /// When true, only registered relayers may fill swaps
    pub permissioned: bool,
}

/// Escrow accounting for one registered asset.
///
/// `balance == total_escrowed - total_released` at all times.
#[cw_serde]
#[derive(Default)]
pub struct EscrowLedger {
    pub balance: Uint128,
    pub total_escrowed: Uint128,
    pub total_released: Uint128,
}

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:swap-bridge-main";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const CONFIG: Item<Config> = Item::new("config");

/// Registered assets with the metadata probed at registration
/// Key: CW20 contract address, Value: metadata
pub const REGISTERED: Map<&Addr, TokenMetadata> = Map::new("registered");

/// Escrow per registered asset
pub const ESCROW: Map<&Addr, EscrowLedger> = Map::new("escrow");


/// Nonce for Main → Side swaps
pub const OUTGOING_NONCE: Item<u64> = Item::new("outgoing_nonce");

/// Counter for registrations, only used to separate registration tx ids
pub const REGISTRATION_NONCE: Item<u64> = Item::new("registration_nonce");
