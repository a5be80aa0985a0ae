//! Withdrawal guard and fee sweep handlers.
//!
//! Emergency withdrawal is a two-step state machine: the owner requests an
//! unlock, waits out `lock_duration`, and may then withdraw until the
//! request is `unlock_window` old. The request timestamp is never reset, so
//! multiple withdrawals within one open window are permitted.

use cosmwasm_std::{
    to_json_binary, CosmosMsg, DepsMut, Env, MessageInfo, Response, Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;

use crate::access::ensure_owner;
use crate::error::ContractError;
use crate::oracle::cw20_balance;
use crate::state::{COLLECTED_FEES, CONFIG, UNLOCK_REQUESTED_AT};

/// Stamp the unlock request time, starting the lock period.
pub fn execute_request_unlock(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    let now = env.block.time.seconds();
    UNLOCK_REQUESTED_AT.save(deps.storage, &now)?;

    Ok(Response::new()
        .add_attribute("method", "request_unlock")
        .add_attribute("requested_at", now.to_string()))
}

/// Withdraw custodied CW20 tokens to the owner, gated by the time lock.
///
/// Valid iff `requested_at < now - lock_duration` (lock elapsed) and
/// `requested_at > now - unlock_window` (window still open).
pub fn execute_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: String,
    quantity: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    let requested_at = UNLOCK_REQUESTED_AT.load(deps.storage)?;
    let now = env.block.time.seconds();

    if requested_at >= now.saturating_sub(config.lock_duration) {
        return Err(ContractError::LockPeriodNotElapsed);
    }
    if requested_at <= now.saturating_sub(config.unlock_window) {
        return Err(ContractError::UnlockWindowExpired);
    }

    let token_addr = deps.api.addr_validate(&token)?;
    let custody = cw20_balance(&deps.querier, &token_addr, &env.contract.address)?;
    if custody < quantity {
        return Err(ContractError::InsufficientBalance);
    }

    let transfer = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token_addr.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: info.sender.to_string(),
            amount: quantity,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(transfer)
        .add_attribute("method", "withdraw")
        .add_attribute("token", token)
        .add_attribute("quantity", quantity.to_string()))
}

/// Sweep accumulated CDT fees to the caller and reset the counter.
pub fn execute_collect_fees(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    let collected = COLLECTED_FEES.load(deps.storage)?;

    let custody = cw20_balance(&deps.querier, &config.token, &env.contract.address)?;
    if custody < collected {
        return Err(ContractError::InsufficientBalance);
    }

    COLLECTED_FEES.save(deps.storage, &Uint128::zero())?;

    let sweep = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: info.sender.to_string(),
            amount: collected,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(sweep)
        .add_attribute("method", "collect_fees")
        .add_attribute("collected", collected.to_string()))
}
