//! Query handlers for the Main bridge contract.

use common::{filled, relayers};
use cosmwasm_std::{Addr, Binary, Deps, Order, StdResult};
use cw_storage_plus::Bound;

use crate::msg::{
    ConfigResponse, EscrowBalanceResponse, IsFilledResponse, NonceResponse,
    RegisteredAssetResponse, RegisteredAssetsResponse, RelayersResponse,
};
use crate::state::{CONFIG, ESCROW, OUTGOING_NONCE, REGISTERED};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: config.admin,
        permissioned: config.permissioned,
    })
}

pub fn query_is_registered(deps: Deps, asset: String) -> StdResult<bool> {
    let Ok(asset_addr) = deps.api.addr_validate(&asset) else {
        return Ok(false);
    };
    Ok(REGISTERED.has(deps.storage, &asset_addr))
}

pub fn query_registered_asset(deps: Deps, asset: String) -> StdResult<RegisteredAssetResponse> {
    let asset_addr = deps.api.addr_validate(&asset)?;
    let metadata = REGISTERED.load(deps.storage, &asset_addr)?;
    Ok(RegisteredAssetResponse {
        asset: asset_addr,
        name: metadata.name,
        symbol: metadata.symbol,
        decimals: metadata.decimals,
    })
}

pub fn query_registered_assets(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<RegisteredAssetsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start_addr = start_after
        .map(|s| deps.api.addr_validate(&s))
        .transpose()?;
    let start = start_addr.as_ref().map(Bound::exclusive);

    let assets = REGISTERED
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (asset, metadata) = item?;
            Ok(RegisteredAssetResponse {
                asset,
                name: metadata.name,
                symbol: metadata.symbol,
                decimals: metadata.decimals,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(RegisteredAssetsResponse { assets })
}

pub fn query_escrow_balance(deps: Deps, asset: String) -> StdResult<EscrowBalanceResponse> {
    let asset_addr = deps.api.addr_validate(&asset)?;
    let ledger = ESCROW
        .may_load(deps.storage, &asset_addr)?
        .unwrap_or_default();
    Ok(EscrowBalanceResponse {
        asset: asset_addr,
        balance: ledger.balance,
        total_escrowed: ledger.total_escrowed,
        total_released: ledger.total_released,
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
