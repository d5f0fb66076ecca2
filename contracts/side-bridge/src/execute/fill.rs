//! Main → Side swap fulfillment (mint).

use common::filled::{ensure_not_filled, mark_filled, parse_tx_id};
use common::{bytes32_to_hex, validate_main_asset};
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdError, Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;

use crate::error::ContractError;
use crate::execute::admin::ensure_relayer;
use crate::state::{PairRecord, PAIRS, SUPPLY};

/// Mint wrapped tokens for an escrow on the Main ledger.
///
/// The Main transaction identifier is consumed in the same transaction as
/// the mint, so a second call with the same identifier always fails.
pub fn execute_fill_main2side_swap(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    source_tx_id: Binary,
    main_asset: String,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_relayer(deps.as_ref(), &info.sender)?;

    let tx_id = parse_tx_id(&source_tx_id)?;
    let pair = load_pair(deps.as_ref(), &main_asset)?;

    ensure_not_filled(deps.storage, &tx_id)?;

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "Amount must be greater than zero".to_string(),
        });
    }

    let recipient_addr = deps.api.addr_validate(&recipient)?;

    let mut supply = SUPPLY
        .may_load(deps.storage, &pair.main_asset)?
        .unwrap_or_default();
    supply.total_minted = supply
        .total_minted
        .checked_add(amount)
        .map_err(StdError::from)?;

    mark_filled(deps.storage, &tx_id, env.block.height)?;
    SUPPLY.save(deps.storage, &pair.main_asset, &supply)?;

    let mint = WasmMsg::Execute {
        contract_addr: pair.wrapped_asset.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Mint {
            recipient: recipient_addr.to_string(),
            amount,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(mint)
        .add_attribute("action", "swap_filled")
        .add_attribute("wrapped_asset", pair.wrapped_asset)
        .add_attribute("main_asset", pair.main_asset)
        .add_attribute("source_tx_id", bytes32_to_hex(&tx_id))
        .add_attribute("recipient", recipient_addr)
        .add_attribute("amount", amount.to_string()))
}

/// Resolve a canonical Main asset identity to its pair.
fn load_pair(deps: Deps, main_asset: &str) -> Result<PairRecord, ContractError> {
    validate_main_asset(main_asset)?;
    PAIRS
        .may_load(deps.storage, main_asset)?
        .ok_or_else(|| ContractError::NoPairForAsset {
            asset: main_asset.to_string(),
        })
}
