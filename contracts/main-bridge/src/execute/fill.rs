//! Side → Main swap fulfillment (release from escrow).

use common::bytes32_to_hex;
use common::filled::{ensure_not_filled, mark_filled, parse_tx_id};
use cosmwasm_std::{
    to_json_binary, Binary, DepsMut, Env, MessageInfo, Response, StdError, Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;

use crate::error::ContractError;
use crate::execute::admin::ensure_relayer;
use crate::execute::registry::load_registered;
use crate::state::{ESCROW};

/// Release escrowed tokens for a burn on the Side ledger.
///
/// The Side transaction identifier is consumed in the same transaction as
/// the release, so a second call with the same identifier always fails.
pub fn execute_fill_side2main_swap(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    source_tx_id: Binary,
    asset: String,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_relayer(deps.as_ref(), &info.sender)?;

    let tx_id = parse_tx_id(&source_tx_id)?;
    let asset_addr = load_registered(deps.as_ref(), &asset)?;

    ensure_not_filled(deps.storage, &tx_id)?;

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "Amount must be greater than zero".to_string(),
        });
    }

    let recipient_addr = deps.api.addr_validate(&recipient)?;

    let mut ledger = ESCROW
        .may_load(deps.storage, &asset_addr)?
        .unwrap_or_default();
    if ledger.balance < amount {
        return Err(ContractError::InsufficientEscrow {
            escrowed: ledger.balance,
            requested: amount,
        });
    }
    ledger.balance -= amount;
    ledger.total_released = ledger
        .total_released
        .checked_add(amount)
        .map_err(StdError::from)?;

    mark_filled(deps.storage, &tx_id, env.block.height)?;
    ESCROW.save(deps.storage, &asset_addr, &ledger)?;

    let release = WasmMsg::Execute {
        contract_addr: asset_addr.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: recipient_addr.to_string(),
            amount,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(release)
        .add_attribute("action", "swap_filled")
        .add_attribute("asset", asset_addr)
        .add_attribute("source_tx_id", bytes32_to_hex(&tx_id))
        .add_attribute("recipient", recipient_addr)
        .add_attribute("amount", amount.to_string()))
}
