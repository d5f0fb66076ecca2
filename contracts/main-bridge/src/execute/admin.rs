//! Admin operations: relayer allow-list and admin transfer.

use common::relayers;
use cosmwasm_std::{Addr, Deps, DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::state::CONFIG;

pub fn execute_add_relayer(
    deps: DepsMut,
    info: MessageInfo,
    relayer: String,
) -> Result<Response, ContractError> {
    ensure_admin(deps.as_ref(), &info.sender)?;

    let relayer_addr = deps.api.addr_validate(&relayer)?;
    relayers::add_relayer(deps.storage, &relayer_addr)?;

    Ok(Response::new()
        .add_attribute("action", "add_relayer")
        .add_attribute("relayer", relayer_addr))
}

pub fn execute_remove_relayer(
    deps: DepsMut,
    info: MessageInfo,
    relayer: String,
) -> Result<Response, ContractError> {
    ensure_admin(deps.as_ref(), &info.sender)?;

    let relayer_addr = deps.api.addr_validate(&relayer)?;
    relayers::remove_relayer(deps.storage, &relayer_addr);

    Ok(Response::new()
        .add_attribute("action", "remove_relayer")
        .add_attribute("relayer", relayer_addr))
}

pub fn execute_set_permissioned(
    deps: DepsMut,
    info: MessageInfo,
    permissioned: bool,
) -> Result<Response, ContractError> {
    ensure_admin(deps.as_ref(), &info.sender)?;

    let mut config = CONFIG.load(deps.storage)?;
    config.permissioned = permissioned;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_permissioned")
        .add_attribute("permissioned", permissioned.to_string()))
}

pub fn execute_transfer_admin(
    deps: DepsMut,
    info: MessageInfo,
    new_admin: String,
) -> Result<Response, ContractError> {
    ensure_admin(deps.as_ref(), &info.sender)?;

    let new_admin_addr = deps.api.addr_validate(&new_admin)?;
    let mut config = CONFIG.load(deps.storage)?;
    config.admin = new_admin_addr.clone();
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "transfer_admin")
        .add_attribute("new_admin", new_admin_addr))
}

fn ensure_admin(deps: Deps, sender: &Addr) -> Result<(), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if *sender != config.admin {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

/// Gate for pair creation and fulfillment under the configured mode.
pub(crate) fn ensure_relayer(deps: Deps, sender: &Addr) -> Result<(), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    relayers::ensure_relayer(deps.storage, config.permissioned, sender)?;
    Ok(())
}
