//! Main Bridge Contract - Entry Points
//!
//! The implementation is split into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use common::relayers;
use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::{get_contract_version, set_contract_version};

use crate::error::ContractError;
use crate::execute::{
    execute_add_relayer, execute_fill_side2main_swap, execute_receive,
    execute_register_swap_pair_to_side, execute_remove_relayer, execute_set_permissioned,
    execute_swap_main2side, execute_transfer_admin,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_config, query_current_nonce, query_escrow_balance, query_is_filled,
    query_is_registered, query_registered_asset, query_registered_assets, query_relayers,
};
use crate::state::{
    Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, OUTGOING_NONCE, REGISTRATION_NONCE,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = deps.api.addr_validate(&msg.admin)?;
    let config = Config {
        admin,
        permissioned: msg.permissioned,
    };
    CONFIG.save(deps.storage, &config)?;

    for relayer in &msg.relayers {
        let relayer_addr = deps.api.addr_validate(relayer)?;
        relayers::add_relayer(deps.storage, &relayer_addr)?;
    }

    OUTGOING_NONCE.save(deps.storage, &0u64)?;
    REGISTRATION_NONCE.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", config.admin)
        .add_attribute("permissioned", config.permissioned.to_string())
        .add_attribute("relayer_count", msg.relayers.len().to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::RegisterSwapPairToSide { asset } => {
            execute_register_swap_pair_to_side(deps, env, info, asset)
        }
        ExecuteMsg::SwapMain2Side {
            asset,
            amount,
            recipient,
        } => execute_swap_main2side(deps, env, info, asset, amount, recipient),
        ExecuteMsg::Receive(cw20_msg) => execute_receive(deps, env, info, cw20_msg),
        ExecuteMsg::FillSide2MainSwap {
            source_tx_id,
            asset,
            recipient,
            amount,
        } => execute_fill_side2main_swap(deps, env, info, source_tx_id, asset, recipient, amount),

        ExecuteMsg::AddRelayer { relayer } => execute_add_relayer(deps, info, relayer),
        ExecuteMsg::RemoveRelayer { relayer } => execute_remove_relayer(deps, info, relayer),
        ExecuteMsg::SetPermissioned { permissioned } => {
            execute_set_permissioned(deps, info, permissioned)
        }
        ExecuteMsg::TransferAdmin { new_admin } => execute_transfer_admin(deps, info, new_admin),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::IsRegistered { asset } => to_json_binary(&query_is_registered(deps, asset)?),
        QueryMsg::RegisteredAsset { asset } => {
            to_json_binary(&query_registered_asset(deps, asset)?)
        }
        QueryMsg::RegisteredAssets { start_after, limit } => {
            to_json_binary(&query_registered_assets(deps, start_after, limit)?)
        }
        QueryMsg::EscrowBalance { asset } => to_json_binary(&query_escrow_balance(deps, asset)?),
        QueryMsg::IsFilled { source_tx_id } => {
            to_json_binary(&query_is_filled(deps, source_tx_id)?)
        }
        QueryMsg::CurrentNonce {} => to_json_binary(&query_current_nonce(deps)?),
        QueryMsg::Relayers {} => to_json_binary(&query_relayers(deps)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::InvalidMigration {
            from: stored.contract,
        });
    }
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("from_version", stored.version)
        .add_attribute("to_version", CONTRACT_VERSION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info};

    fn default_instantiate(deps: DepsMut) {
        let msg = InstantiateMsg {
            admin: "admin".to_string(),
            relayers: vec!["relayer".to_string()],
            permissioned: false,
        };
        instantiate(deps, mock_env(), mock_info("creator", &[]), msg).unwrap();
    }

    #[test]
    fn test_migrate_same_contract() {
        let mut deps = mock_dependencies();
        default_instantiate(deps.as_mut());

        let res = migrate(deps.as_mut(), mock_env(), MigrateMsg {}).unwrap();
        assert_eq!(res.attributes[0].value, "migrate");

        let version = get_contract_version(&deps.storage).unwrap();
        assert_eq!(version.contract, CONTRACT_NAME);
        assert_eq!(version.version, CONTRACT_VERSION);
    }

    #[test]
    fn test_migrate_rejects_foreign_contract() {
        let mut deps = mock_dependencies();
        set_contract_version(&mut deps.storage, "crates.io:cw20-base", "1.1.2").unwrap();

        let err = migrate(deps.as_mut(), mock_env(), MigrateMsg {}).unwrap_err();
        assert_eq!(
            err,
            ContractError::InvalidMigration {
                from: "crates.io:cw20-base".to_string()
            }
        );
    }

    #[test]
    fn test_instantiate_rejects_invalid_relayer() {
        let mut deps = mock_dependencies();
        let msg = InstantiateMsg {
            admin: "admin".to_string(),
            relayers: vec!["NotLowercase".to_string()],
            permissioned: true,
        };
        let err = instantiate(deps.as_mut(), mock_env(), mock_info("creator", &[]), msg);
        assert!(err.is_err());
    }
}
