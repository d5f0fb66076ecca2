//! Asset registration (Main half of the pair map).
//!
//! Main only keeps the set of registered assets; the address pairs live on
//! the Side bridge, which learns the metadata from the emitted event.

use common::{bytes32_to_hex, query_token_metadata, transaction_id, TxKind};
use cosmwasm_std::{Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response};

use crate::error::ContractError;
use crate::state::{EscrowLedger, ESCROW, REGISTERED, REGISTRATION_NONCE};

/// Register a CW20 asset so it can be escrowed and later released.
pub fn execute_register_swap_pair_to_side(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    asset: String,
) -> Result<Response, ContractError> {
    let asset_addr = deps
        .api
        .addr_validate(&asset)
        .map_err(|_| ContractError::NotAContract {
            asset: asset.clone(),
        })?;

    if REGISTERED.has(deps.storage, &asset_addr) {
        return Err(ContractError::AlreadyRegistered { asset });
    }

    let metadata = query_token_metadata(&deps.querier, asset_addr.as_str())
        .map_err(|_| ContractError::NotAContract {
            asset: asset.clone(),
        })?;
    metadata.validate()?;

    REGISTERED.save(deps.storage, &asset_addr, &metadata)?;
    ESCROW.save(deps.storage, &asset_addr, &EscrowLedger::default())?;

    let nonce = REGISTRATION_NONCE.load(deps.storage)?;
    REGISTRATION_NONCE.save(deps.storage, &(nonce + 1))?;
    let tx_id = transaction_id(&env, TxKind::Register, nonce);

    Ok(Response::new()
        .set_data(Binary::from(tx_id.to_vec()))
        .add_attribute("action", "register_swap_pair")
        .add_attribute("sender", info.sender)
        .add_attribute("asset", asset_addr)
        .add_attribute("name", metadata.name)
        .add_attribute("symbol", metadata.symbol)
        .add_attribute("decimals", metadata.decimals.to_string())
        .add_attribute("tx_id", bytes32_to_hex(&tx_id)))
}

/// Resolve `asset` to a registered asset address.
pub(crate) fn load_registered(deps: Deps, asset: &str) -> Result<Addr, ContractError> {
    let not_registered = || ContractError::NotRegistered {
        asset: asset.to_string(),
    };

    let asset_addr = deps.api.addr_validate(asset).map_err(|_| not_registered())?;
    if !REGISTERED.has(deps.storage, &asset_addr) {
        return Err(not_registered());
    }
    Ok(asset_addr)
}
