//! Side → Main swap initiation (burn).

use common::{bytes32_to_hex, transaction_id, TxKind};
use cosmwasm_std::{
    from_json, to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdError,
    Uint128, WasmMsg,
};
use cw20::{Cw20ExecuteMsg, Cw20ReceiveMsg};

use crate::error::ContractError;
use crate::msg::ReceiveMsg;
use crate::state::{OUTGOING_NONCE, SIDE_TO_MAIN, SUPPLY};

/// Pull `amount` of a wrapped token from the caller's allowance and burn it.
pub fn execute_swap_side2main(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    wrapped_asset: String,
    amount: Uint128,
    recipient: Option<String>,
) -> Result<Response, ContractError> {
    let (wrapped_addr, main_asset) = load_wrapped(deps.as_ref(), &wrapped_asset)?;

    let pull = WasmMsg::Execute {
        contract_addr: wrapped_addr.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: info.sender.to_string(),
            recipient: env.contract.address.to_string(),
            amount,
        })?,
        funds: vec![],
    };

    let response = start_burn(
        deps,
        &env,
        &info.sender,
        &wrapped_addr,
        main_asset,
        amount,
        recipient,
    )?;
    // Messages run in order: the pull lands before the burn
    Ok(response
        .add_message(pull)
        .add_message(burn_msg(&wrapped_addr, amount)?))
}

/// Burn wrapped tokens delivered with a CW20 `Send`.
///
/// `info.sender` is the wrapped token contract; the user is `wrapper.sender`.
pub fn execute_receive(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    wrapper: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let msg: ReceiveMsg = from_json(&wrapper.msg)?;
    let (wrapped_addr, main_asset) = load_wrapped(deps.as_ref(), info.sender.as_str())?;
    let sender = deps.api.addr_validate(&wrapper.sender)?;

    match msg {
        ReceiveMsg::SwapSide2Main { recipient } => {
            let response = start_burn(
                deps,
                &env,
                &sender,
                &wrapped_addr,
                main_asset,
                wrapper.amount,
                recipient,
            )?;
            Ok(response.add_message(burn_msg(&wrapped_addr, wrapper.amount)?))
        }
    }
}

/// Book the burn and emit `swap_started`; callers attach the token messages.
fn start_burn(
    deps: DepsMut,
    env: &Env,
    sender: &Addr,
    wrapped_asset: &Addr,
    main_asset: String,
    amount: Uint128,
    recipient: Option<String>,
) -> Result<Response, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "Amount must be greater than zero".to_string(),
        });
    }

    let recipient = match recipient {
        Some(r) if !r.trim().is_empty() => r,
        _ => sender.to_string(),
    };

    let mut supply = SUPPLY
        .may_load(deps.storage, &main_asset)?
        .unwrap_or_default();
    supply.total_burned = supply
        .total_burned
        .checked_add(amount)
        .map_err(StdError::from)?;
    SUPPLY.save(deps.storage, &main_asset, &supply)?;

    let nonce = OUTGOING_NONCE.load(deps.storage)?;
    OUTGOING_NONCE.save(deps.storage, &(nonce + 1))?;

    let tx_id = transaction_id(env, TxKind::Side2Main, nonce);

    Ok(Response::new()
        .set_data(Binary::from(tx_id.to_vec()))
        .add_attribute("action", "swap_started")
        .add_attribute("wrapped_asset", wrapped_asset.to_string())
        .add_attribute("main_asset", main_asset)
        .add_attribute("sender", sender.to_string())
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount.to_string())
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("tx_id", bytes32_to_hex(&tx_id)))
}

fn burn_msg(wrapped_asset: &Addr, amount: Uint128) -> Result<WasmMsg, ContractError> {
    Ok(WasmMsg::Execute {
        contract_addr: wrapped_asset.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Burn { amount })?,
        funds: vec![],
    })
}

/// Resolve `wrapped_asset` to a known wrapped token and its Main asset.
fn load_wrapped(deps: Deps, wrapped_asset: &str) -> Result<(Addr, String), ContractError> {
    let no_pair = || ContractError::NoPairForAsset {
        asset: wrapped_asset.to_string(),
    };

    let wrapped_addr = deps
        .api
        .addr_validate(wrapped_asset)
        .map_err(|_| no_pair())?;
    let main_asset = SIDE_TO_MAIN
        .may_load(deps.storage, &wrapped_addr)?
        .ok_or_else(no_pair)?;
    Ok((wrapped_addr, main_asset))
}
