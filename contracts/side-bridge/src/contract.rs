//! Side Bridge Contract - Entry Points
//!
//! The implementation is split into:
//! - `execute/` - Execute message handlers and the instantiate reply
//! - `query` - Query message handlers

use common::{relayers, TokenMetadata};
use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult,
};
use cw2::{get_contract_version, set_contract_version};

use crate::error::ContractError;
use crate::execute::{
    execute_add_relayer, execute_create_swap_pair, execute_fill_main2side_swap, execute_receive,
    execute_remove_relayer, execute_set_permissioned, execute_swap_side2main,
    execute_transfer_admin, handle_wrapped_instantiated,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_config, query_current_nonce, query_is_filled, query_main_of, query_pair,
    query_pair_by_wrapped, query_pairs, query_relayers, query_side_of, query_supply,
};
use crate::state::{
    Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, INSTANTIATE_WRAPPED_REPLY_ID,
    OUTGOING_NONCE,
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
        wrapped_token_code_id: msg.wrapped_token_code_id,
    };
    CONFIG.save(deps.storage, &config)?;

    for relayer in &msg.relayers {
        let relayer_addr = deps.api.addr_validate(relayer)?;
        relayers::add_relayer(deps.storage, &relayer_addr)?;
    }

    OUTGOING_NONCE.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", config.admin)
        .add_attribute("permissioned", config.permissioned.to_string())
        .add_attribute(
            "wrapped_token_code_id",
            config.wrapped_token_code_id.to_string(),
        )
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
        ExecuteMsg::CreateSwapPair {
            proof_tx_id,
            main_asset,
            name,
            symbol,
            decimals,
        } => execute_create_swap_pair(
            deps,
            env,
            info,
            proof_tx_id,
            main_asset,
            TokenMetadata {
                name,
                symbol,
                decimals,
            },
        ),
        ExecuteMsg::FillMain2SideSwap {
            source_tx_id,
            main_asset,
            recipient,
            amount,
        } => execute_fill_main2side_swap(
            deps,
            env,
            info,
            source_tx_id,
            main_asset,
            recipient,
            amount,
        ),
        ExecuteMsg::SwapSide2Main {
            wrapped_asset,
            amount,
            recipient,
        } => execute_swap_side2main(deps, env, info, wrapped_asset, amount, recipient),
        ExecuteMsg::Receive(cw20_msg) => execute_receive(deps, env, info, cw20_msg),

        ExecuteMsg::AddRelayer { relayer } => execute_add_relayer(deps, info, relayer),
        ExecuteMsg::RemoveRelayer { relayer } => execute_remove_relayer(deps, info, relayer),
        ExecuteMsg::SetPermissioned { permissioned } => {
            execute_set_permissioned(deps, info, permissioned)
        }
        ExecuteMsg::TransferAdmin { new_admin } => execute_transfer_admin(deps, info, new_admin),
    }
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        INSTANTIATE_WRAPPED_REPLY_ID => handle_wrapped_instantiated(deps, msg),
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Pair { main_asset } => to_json_binary(&query_pair(deps, main_asset)?),
        QueryMsg::PairByWrapped { wrapped_asset } => {
            to_json_binary(&query_pair_by_wrapped(deps, wrapped_asset)?)
        }
        QueryMsg::SideOf { main_asset } => to_json_binary(&query_side_of(deps, main_asset)?),
        QueryMsg::MainOf { wrapped_asset } => {
            to_json_binary(&query_main_of(deps, wrapped_asset)?)
        }
        QueryMsg::Pairs { start_after, limit } => {
            to_json_binary(&query_pairs(deps, start_after, limit)?)
        }
        QueryMsg::Supply { main_asset } => to_json_binary(&query_supply(deps, main_asset)?),
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
    use common::BridgeError;
    use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info};
    use cosmwasm_std::{SubMsgResponse, SubMsgResult};

    #[test]
    fn test_reply_rejects_unknown_id() {
        let mut deps = mock_dependencies();
        let msg = Reply {
            id: 42,
            result: SubMsgResult::Ok(SubMsgResponse {
                events: vec![],
                data: None,
            }),
        };
        assert_eq!(
            reply(deps.as_mut(), mock_env(), msg).unwrap_err(),
            ContractError::UnknownReplyId { id: 42 }
        );
    }

    #[test]
    fn test_migrate_rejects_main_bridge_state() {
        let mut deps = mock_dependencies();
        set_contract_version(&mut deps.storage, "crates.io:swap-bridge-main", "0.1.0").unwrap();

        let err = migrate(deps.as_mut(), mock_env(), MigrateMsg {}).unwrap_err();
        assert_eq!(
            err,
            ContractError::InvalidMigration {
                from: "crates.io:swap-bridge-main".to_string()
            }
        );
    }

    #[test]
    fn test_create_pair_rejects_short_proof() {
        let mut deps = mock_dependencies();
        instantiate(
            deps.as_mut(),
            mock_env(),
            mock_info("creator", &[]),
            InstantiateMsg {
                admin: "admin".to_string(),
                relayers: vec![],
                permissioned: false,
                wrapped_token_code_id: 1,
            },
        )
        .unwrap();

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("relayer", &[]),
            ExecuteMsg::CreateSwapPair {
                proof_tx_id: Binary::from(vec![1u8; 31]),
                main_asset: "terra1tokena".to_string(),
                name: "Token A".to_string(),
                symbol: "TokenA".to_string(),
                decimals: 18,
            },
        )
        .unwrap_err();
        assert_eq!(
            err,
            ContractError::Bridge(BridgeError::InvalidTxIdLength { got: 31 })
        );
    }
}
