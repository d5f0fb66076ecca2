//! Main → Side swap initiation (escrow).

use common::{bytes32_to_hex, transaction_id, TxKind};
use cosmwasm_std::{
    from_json, to_json_binary, Addr, Binary, DepsMut, Env, MessageInfo, Response, StdError,
    Uint128, WasmMsg,
};
use cw20::{Cw20ExecuteMsg, Cw20ReceiveMsg};

use crate::error::ContractError;
use crate::execute::registry::load_registered;
use crate::msg::ReceiveMsg;
use crate::state::{ESCROW, OUTGOING_NONCE};

/// Escrow `amount` of `asset` pulled from the caller's allowance.
pub fn execute_swap_main2side(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    asset: String,
    amount: Uint128,
    recipient: Option<String>,
) -> Result<Response, ContractError> {
    let asset_addr = load_registered(deps.as_ref(), &asset)?;

    // Runs after this handler; a failed pull reverts the whole transaction
    let pull = WasmMsg::Execute {
        contract_addr: asset_addr.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: info.sender.to_string(),
            recipient: env.contract.address.to_string(),
            amount,
        })?,
        funds: vec![],
    };

    let response = start_swap(deps, &env, &info.sender, &asset_addr, amount, recipient)?;
    Ok(response.add_message(pull))
}

/// Escrow tokens delivered with a CW20 `Send`.
///
/// `info.sender` is the token contract; the user is `wrapper.sender`.
pub fn execute_receive(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    wrapper: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let msg: ReceiveMsg = from_json(&wrapper.msg)?;
    let asset_addr = load_registered(deps.as_ref(), info.sender.as_str())?;
    let sender = deps.api.addr_validate(&wrapper.sender)?;

    match msg {
        ReceiveMsg::SwapMain2Side { recipient } => {
            start_swap(deps, &env, &sender, &asset_addr, wrapper.amount, recipient)
        }
    }
}

/// Book the escrow and emit `swap_started`.
fn start_swap(
    deps: DepsMut,
    env: &Env,
    sender: &Addr,
    asset: &Addr,
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

    let mut ledger = ESCROW.may_load(deps.storage, asset)?.unwrap_or_default();
    ledger.balance = ledger.balance.checked_add(amount).map_err(StdError::from)?;
    ledger.total_escrowed = ledger
        .total_escrowed
        .checked_add(amount)
        .map_err(StdError::from)?;
    ESCROW.save(deps.storage, asset, &ledger)?;

    let nonce = OUTGOING_NONCE.load(deps.storage)?;
    OUTGOING_NONCE.save(deps.storage, &(nonce + 1))?;

    let tx_id = transaction_id(env, TxKind::Main2Side, nonce);

    Ok(Response::new()
        .set_data(Binary::from(tx_id.to_vec()))
        .add_attribute("action", "swap_started")
        .add_attribute("asset", asset.to_string())
        .add_attribute("sender", sender.to_string())
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount.to_string())
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("tx_id", bytes32_to_hex(&tx_id)))
}
