//! Pair creation (Side half of the pair map).
//!
//! The wrapped token is instantiated through a sub-message; the mapping is
//! only written once the reply reports the new contract's address, so a
//! failed instantiation leaves no half-created pair behind.

use common::filled::parse_tx_id;
use common::{bytes32_to_hex, validate_main_asset, TokenMetadata};
use cosmwasm_std::{
    to_json_binary, Binary, DepsMut, Env, MessageInfo, Reply, Response, StdError, SubMsg,
    SubMsgResponse, WasmMsg,
};
use wrapped_token::msg::InstantiateMsg as WrappedInstantiateMsg;

use crate::error::ContractError;
use crate::execute::admin::ensure_relayer;
use crate::state::{
    PairRecord, PendingPair, SupplyLedger, CONFIG, INSTANTIATE_WRAPPED_REPLY_ID, PAIRS,
    PENDING_PAIR, SIDE_TO_MAIN, SUPPLY,
};

/// Create the wrapped token for `main_asset` from the relayed registration.
pub fn execute_create_swap_pair(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    proof_tx_id: Binary,
    main_asset: String,
    metadata: TokenMetadata,
) -> Result<Response, ContractError> {
    ensure_relayer(deps.as_ref(), &info.sender)?;

    let proof = parse_tx_id(&proof_tx_id)?;
    validate_main_asset(&main_asset)?;
    metadata.validate()?;
    if PAIRS.has(deps.storage, &main_asset) {
        return Err(ContractError::DuplicatePair { main_asset });
    }

    let config = CONFIG.load(deps.storage)?;
    let instantiate = WasmMsg::Instantiate {
        admin: Some(config.admin.to_string()),
        code_id: config.wrapped_token_code_id,
        msg: to_json_binary(&WrappedInstantiateMsg {
            name: metadata.name.clone(),
            symbol: metadata.symbol.clone(),
            decimals: metadata.decimals,
            main_asset: main_asset.clone(),
        })?,
        funds: vec![],
        label: format!("wrapped {} ({})", metadata.symbol, main_asset),
    };

    PENDING_PAIR.save(
        deps.storage,
        &PendingPair {
            main_asset: main_asset.clone(),
            metadata,
            proof_tx_id,
        },
    )?;

    Ok(Response::new()
        .add_submessage(SubMsg::reply_on_success(
            instantiate,
            INSTANTIATE_WRAPPED_REPLY_ID,
        ))
        .add_attribute("action", "create_swap_pair")
        .add_attribute("sender", info.sender)
        .add_attribute("main_asset", main_asset)
        .add_attribute("proof_tx_id", bytes32_to_hex(&proof))
        .add_attribute("bridge", env.contract.address))
}

/// Record the pair once the wrapped token exists.
pub fn handle_wrapped_instantiated(deps: DepsMut, msg: Reply) -> Result<Response, ContractError> {
    let response = msg.result.into_result().map_err(StdError::generic_err)?;
    let wrapped_addr = deps.api.addr_validate(&instantiated_address(&response)?)?;

    let pending = PENDING_PAIR.load(deps.storage)?;
    PENDING_PAIR.remove(deps.storage);

    let pair = PairRecord {
        main_asset: pending.main_asset,
        wrapped_asset: wrapped_addr,
        metadata: pending.metadata,
        proof_tx_id: pending.proof_tx_id,
    };
    PAIRS.save(deps.storage, &pair.main_asset, &pair)?;
    SIDE_TO_MAIN.save(deps.storage, &pair.wrapped_asset, &pair.main_asset)?;
    SUPPLY.save(deps.storage, &pair.main_asset, &SupplyLedger::default())?;

    let proof = parse_tx_id(&pair.proof_tx_id)?;

    Ok(Response::new()
        .add_attribute("action", "swap_pair_created")
        .add_attribute("main_asset", pair.main_asset)
        .add_attribute("wrapped_asset", pair.wrapped_asset)
        .add_attribute("name", pair.metadata.name)
        .add_attribute("symbol", pair.metadata.symbol)
        .add_attribute("decimals", pair.metadata.decimals.to_string())
        .add_attribute("proof_tx_id", bytes32_to_hex(&proof)))
}

/// Address reported by the `instantiate` event of a sub-message.
fn instantiated_address(response: &SubMsgResponse) -> Result<String, ContractError> {
    response
        .events
        .iter()
        .filter(|event| event.ty == "instantiate")
        .flat_map(|event| &event.attributes)
        .find(|attr| attr.key == "_contract_address")
        .map(|attr| attr.value.clone())
        .ok_or(ContractError::MissingWrappedAddress)
}
