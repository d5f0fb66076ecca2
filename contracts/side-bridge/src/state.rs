//! State definitions for the Side bridge contract

use common::TokenMetadata;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Uint128};
use cw_storage_plus::{Item, Map};

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Admin address for relayer management
    pub admin: Addr,
    /// When true, only registered relayers may create pairs and fill swaps
    pub permissioned: bool,
    /// Code id instantiated for every new wrapped token
    pub wrapped_token_code_id: u64,
}

/// One Main asset and its wrapped counterpart. Never mutated once saved.
#[cw_serde]
pub struct PairRecord {
    pub main_asset: String,
    pub wrapped_asset: Addr,
    pub metadata: TokenMetadata,
    /// Main registration transaction the pair was created from
    pub proof_tx_id: Binary,
}

/// Pair waiting for its wrapped token's instantiate reply
#[cw_serde]
pub struct PendingPair {
    pub main_asset: String,
    pub metadata: TokenMetadata,
    pub proof_tx_id: Binary,
}

/// Mint/burn totals for one pair.
///
/// `total_minted - total_burned` is the wrapped token's circulating supply.
#[cw_serde]
#[derive(Default)]
pub struct SupplyLedger {
    pub total_minted: Uint128,
    pub total_burned: Uint128,
}

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:swap-bridge-side";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reply id for wrapped token instantiation
pub const INSTANTIATE_WRAPPED_REPLY_ID: u64 = 1;

pub const CONFIG: Item<Config> = Item::new("config");

pub const PENDING_PAIR: Item<PendingPair> = Item::new("pending_pair");

/// Main → Side direction of the pair map
/// Key: Main asset identity, Value: pair record
pub const PAIRS: Map<&str, PairRecord> = Map::new("pairs");

/// Side → Main direction of the pair map
/// Key: wrapped token address, Value: Main asset identity
pub const SIDE_TO_MAIN: Map<&Addr, String> = Map::new("side_to_main");

/// Supply ledger per pair, keyed by Main asset identity
pub const SUPPLY: Map<&str, SupplyLedger> = Map::new("supply");


/// Nonce for Side → Main swaps
pub const OUTGOING_NONCE: Item<u64> = Item::new("outgoing_nonce");
