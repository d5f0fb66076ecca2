//! Query handlers for the Side bridge contract.

use common::{filled, relayers};
use cosmwasm_std::{Addr, Binary, Deps, Order, StdResult};
use cw_storage_plus::Bound;

use crate::msg::{
    ConfigResponse, IsFilledResponse, NonceResponse, PairResponse, PairsResponse,
    RelayersResponse, SupplyResponse,
};
use crate::state::{
    PairRecord, CONFIG, OUTGOING_NONCE, PAIRS, SIDE_TO_MAIN, SUPPLY,
};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

impl From<PairRecord> for PairResponse {
    fn from(pair: PairRecord) -> Self {
        Self {
            main_asset: pair.main_asset,
            wrapped_asset: pair.wrapped_asset,
            name: pair.metadata.name,
            symbol: pair.metadata.symbol,
            decimals: pair.metadata.decimals,
            proof_tx_id: pair.proof_tx_id,
        }
    }
}

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: config.admin,
        permissioned: config.permissioned,
        wrapped_token_code_id: config.wrapped_token_code_id,
    })
}

pub fn query_pair(deps: Deps, main_asset: String) -> StdResult<PairResponse> {
    let pair = PAIRS.load(deps.storage, &main_asset)?;
    Ok(pair.into())
}

pub fn query_pair_by_wrapped(deps: Deps, wrapped_asset: String) -> StdResult<PairResponse> {
    let wrapped_addr = deps.api.addr_validate(&wrapped_asset)?;
    let main_asset = SIDE_TO_MAIN.load(deps.storage, &wrapped_addr)?;
    query_pair(deps, main_asset)
}

pub fn query_side_of(deps: Deps, main_asset: String) -> StdResult<Option<Addr>> {
    Ok(PAIRS
        .may_load(deps.storage, &main_asset)?
        .map(|pair| pair.wrapped_asset))
}

pub fn query_main_of(deps: Deps, wrapped_asset: String) -> StdResult<Option<String>> {
    let Ok(wrapped_addr) = deps.api.addr_validate(&wrapped_asset) else {
        return Ok(None);
    };
    SIDE_TO_MAIN.may_load(deps.storage, &wrapped_addr)
}

pub fn query_pairs(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<PairsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.as_deref().map(Bound::exclusive);

    let pairs = PAIRS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, pair)| pair.into()))
        .collect::<StdResult<Vec<PairResponse>>>()?;

    Ok(PairsResponse { pairs })
}

pub fn query_supply(deps: Deps, main_asset: String) -> StdResult<SupplyResponse> {
    let pair = PAIRS.load(deps.storage, &main_asset)?;
    let supply = SUPPLY
        .may_load(deps.storage, &main_asset)?
        .unwrap_or_default();
    Ok(SupplyResponse {
        main_asset: pair.main_asset,
        wrapped_asset: pair.wrapped_asset,
        outstanding: supply.total_minted.checked_sub(supply.total_burned)?,
        total_minted: supply.total_minted,
        total_burned: supply.total_burned,
    })
}

pub fn query_is_filled(deps: Deps, source_tx_id: Binary) -> StdResult<IsFilledResponse> {
    let filled_at = filled::filled_at(deps.storage, &source_tx_id)?;
    Ok(IsFilledResponse {
        filled: filled_at.is_some(),
        filled_at,
    })
}

pub fn query_current_nonce(deps: Deps) -> StdResult<NonceResponse> {
    let nonce = OUTGOING_NONCE.load(deps.storage)?;
    Ok(NonceResponse { nonce })
}

pub fn query_relayers(deps: Deps) -> StdResult<RelayersResponse> {
    Ok(RelayersResponse {
        relayers: relayers::list_relayers(deps.storage)?,
    })
}
