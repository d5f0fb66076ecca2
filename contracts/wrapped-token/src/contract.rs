use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::{get_contract_version, set_contract_version};
use cw20::{Cw20ExecuteMsg, MinterResponse};
use cw20_base::msg::{InstantiateMsg as BaseInstantiateMsg, QueryMsg as BaseQueryMsg};

use crate::error::ContractError;
use crate::msg::{BindingResponse, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::state::{Binding, BINDING, CONTRACT_NAME, CONTRACT_VERSION};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    if msg.main_asset.trim().is_empty() {
        return Err(ContractError::EmptyMainAsset);
    }

    let base_msg = BaseInstantiateMsg {
        name: msg.name,
        symbol: msg.symbol,
        decimals: msg.decimals,
        initial_balances: vec![],
        mint: Some(MinterResponse {
            minter: info.sender.to_string(),
            cap: None,
        }),
        marketing: None,
    };
    cw20_base::contract::instantiate(deps.branch(), env, info.clone(), base_msg)?;

    // cw20-base stamps its own name; this contract owns the version slot
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let binding = Binding {
        bridge: info.sender,
        main_asset: msg.main_asset,
    };
    BINDING.save(deps.storage, &binding)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("bridge", binding.bridge)
        .add_attribute("main_asset", binding.main_asset))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: Cw20ExecuteMsg,
) -> Result<Response, ContractError> {
    match &msg {
        Cw20ExecuteMsg::Mint { .. }
        | Cw20ExecuteMsg::Burn { .. }
        | Cw20ExecuteMsg::BurnFrom { .. } => {
            let binding = BINDING.load(deps.storage)?;
            if info.sender != binding.bridge {
                return Err(ContractError::Unauthorized);
            }
        }
        // The minter is fixed for the token's lifetime
        Cw20ExecuteMsg::UpdateMinter { .. } => return Err(ContractError::Unauthorized),
        _ => {}
    }

    Ok(cw20_base::contract::execute(deps, env, info, msg)?)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    let base = match msg {
        QueryMsg::Binding {} => return to_json_binary(&query_binding(deps)?),
        QueryMsg::Balance { address } => BaseQueryMsg::Balance { address },
        QueryMsg::TokenInfo {} => BaseQueryMsg::TokenInfo {},
        QueryMsg::Minter {} => BaseQueryMsg::Minter {},
        QueryMsg::Allowance { owner, spender } => BaseQueryMsg::Allowance { owner, spender },
        QueryMsg::AllAllowances {
            owner,
            start_after,
            limit,
        } => BaseQueryMsg::AllAllowances {
            owner,
            start_after,
            limit,
        },
        QueryMsg::AllAccounts { start_after, limit } => {
            BaseQueryMsg::AllAccounts { start_after, limit }
        }
    };
    cw20_base::contract::query(deps, env, base)
}

fn query_binding(deps: Deps) -> StdResult<BindingResponse> {
    let binding = BINDING.load(deps.storage)?;
    Ok(BindingResponse {
        bridge: binding.bridge,
        main_asset: binding.main_asset,
    })
}

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
    use cosmwasm_std::{from_json, Uint128};
    use cw20::{BalanceResponse, TokenInfoResponse};

    const BRIDGE: &str = "side_bridge";

    fn setup(deps: DepsMut) {
        let msg = InstantiateMsg {
            name: "Token A".to_string(),
            symbol: "TokenA".to_string(),
            decimals: 18,
            main_asset: "main_token_a".to_string(),
        };
        instantiate(deps, mock_env(), mock_info(BRIDGE, &[]), msg).unwrap();
    }

    fn balance(deps: Deps, address: &str) -> Uint128 {
        let res = query(
            deps,
            mock_env(),
            QueryMsg::Balance {
                address: address.to_string(),
            },
        )
        .unwrap();
        from_json::<BalanceResponse>(&res).unwrap().balance
    }

    #[test]
    fn test_instantiate_binds_bridge_as_minter() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        let binding: BindingResponse =
            from_json(query(deps.as_ref(), mock_env(), QueryMsg::Binding {}).unwrap()).unwrap();
        assert_eq!(binding.bridge, BRIDGE);
        assert_eq!(binding.main_asset, "main_token_a");

        let minter: Option<MinterResponse> =
            from_json(query(deps.as_ref(), mock_env(), QueryMsg::Minter {}).unwrap()).unwrap();
        assert_eq!(minter.unwrap().minter, BRIDGE);

        let info: TokenInfoResponse =
            from_json(query(deps.as_ref(), mock_env(), QueryMsg::TokenInfo {}).unwrap()).unwrap();
        assert_eq!(info.name, "Token A");
        assert_eq!(info.symbol, "TokenA");
        assert_eq!(info.decimals, 18);
        assert_eq!(info.total_supply, Uint128::zero());

        let version = get_contract_version(deps.as_ref().storage).unwrap();
        assert_eq!(version.contract, CONTRACT_NAME);
    }

    #[test]
    fn test_instantiate_rejects_empty_main_asset() {
        let mut deps = mock_dependencies();
        let msg = InstantiateMsg {
            name: "Token A".to_string(),
            symbol: "TokenA".to_string(),
            decimals: 18,
            main_asset: "  ".to_string(),
        };
        let err = instantiate(deps.as_mut(), mock_env(), mock_info(BRIDGE, &[]), msg).unwrap_err();
        assert_eq!(err, ContractError::EmptyMainAsset);
    }

    #[test]
    fn test_only_bridge_mints() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        let mint = Cw20ExecuteMsg::Mint {
            recipient: "user".to_string(),
            amount: Uint128::new(1000),
        };
        let err = execute(deps.as_mut(), mock_env(), mock_info("user", &[]), mint.clone())
            .unwrap_err();
        assert_eq!(err, ContractError::Unauthorized);

        execute(deps.as_mut(), mock_env(), mock_info(BRIDGE, &[]), mint).unwrap();
        assert_eq!(balance(deps.as_ref(), "user"), Uint128::new(1000));
    }

    #[test]
    fn test_holders_cannot_burn_directly() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        execute(
            deps.as_mut(),
            mock_env(),
            mock_info(BRIDGE, &[]),
            Cw20ExecuteMsg::Mint {
                recipient: "user".to_string(),
                amount: Uint128::new(1000),
            },
        )
        .unwrap();

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("user", &[]),
            Cw20ExecuteMsg::Burn {
                amount: Uint128::new(10),
            },
        )
        .unwrap_err();
        assert_eq!(err, ContractError::Unauthorized);
        assert_eq!(balance(deps.as_ref(), "user"), Uint128::new(1000));
    }

    #[test]
    fn test_minter_cannot_be_changed() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info(BRIDGE, &[]),
            Cw20ExecuteMsg::UpdateMinter {
                new_minter: Some("user".to_string()),
            },
        )
        .unwrap_err();
        assert_eq!(err, ContractError::Unauthorized);
    }

    #[test]
    fn test_transfer_is_standard_cw20() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        execute(
            deps.as_mut(),
            mock_env(),
            mock_info(BRIDGE, &[]),
            Cw20ExecuteMsg::Mint {
                recipient: "alice".to_string(),
                amount: Uint128::new(500),
            },
        )
        .unwrap();
        execute(
            deps.as_mut(),
            mock_env(),
            mock_info("alice", &[]),
            Cw20ExecuteMsg::Transfer {
                recipient: "bob".to_string(),
                amount: Uint128::new(200),
            },
        )
        .unwrap();

        assert_eq!(balance(deps.as_ref(), "alice"), Uint128::new(300));
        assert_eq!(balance(deps.as_ref(), "bob"), Uint128::new(200));
    }

    #[test]
    fn test_migrate_rejects_foreign_contract() {
        let mut deps = mock_dependencies();
        set_contract_version(deps.as_mut().storage, "crates.io:cw20-base", "1.1.2").unwrap();

        let err = migrate(deps.as_mut(), mock_env(), MigrateMsg {}).unwrap_err();
        assert_eq!(
            err,
            ContractError::InvalidMigration {
                from: "crates.io:cw20-base".to_string()
            }
        );
    }
}
