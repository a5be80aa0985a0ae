//! Admin operations handlers.
//!
//! Owner-gated configuration setters, role changes, pause control, and
//! native coin custody.

use cosmwasm_std::{BankMsg, Coin, CosmosMsg, DepsMut, Env, MessageInfo, Response, Uint128};

use crate::access::ensure_owner;
use crate::error::ContractError;
use crate::state::{DexConfig, CONFIG, DEX};

// ============================================================================
// Fee & Oracle Configuration
// ============================================================================

/// Set the dollar-denominated service fee.
pub fn execute_set_fees_in_dollar(
    deps: DepsMut,
    info: MessageInfo,
    fees_in_dollar: Uint128,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    config.fees_in_dollar = fees_in_dollar;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_fees_in_dollar")
        .add_attribute("fees_in_dollar", fees_in_dollar.to_string()))
}

/// Set the percentage fee (basis of 100).
pub fn execute_set_fees_in_cdt_percentage(
    deps: DepsMut,
    info: MessageInfo,
    percentage: u64,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    if percentage > 100 {
        return Err(ContractError::InvalidArgument {
            reason: format!("percentage {percentage} exceeds 100"),
        });
    }

    config.fees_in_cdt_percentage = percentage;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_fees_in_cdt_percentage")
        .add_attribute("percentage", percentage.to_string()))
}

/// Replace the oracle triple.
pub fn execute_set_dex(
    deps: DepsMut,
    info: MessageInfo,
    dex_in: String,
    dex_out: String,
    dex_pool: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    let dex = DexConfig {
        token_in: deps.api.addr_validate(&dex_in)?,
        token_out: deps.api.addr_validate(&dex_out)?,
        pool: deps.api.addr_validate(&dex_pool)?,
    };
    DEX.save(deps.storage, &dex)?;

    Ok(Response::new()
        .add_attribute("method", "set_dex")
        .add_attribute("token_in", dex.token_in)
        .add_attribute("token_out", dex.token_out)
        .add_attribute("pool", dex.pool))
}

/// Pause or resume the bridge.
pub fn execute_set_paused(
    deps: DepsMut,
    info: MessageInfo,
    paused: bool,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    config.paused = paused;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_paused")
        .add_attribute("paused", paused.to_string()))
}

/// Set the minimum outbound transfer quantity.
pub fn execute_set_minimum_transfer_quantity(
    deps: DepsMut,
    info: MessageInfo,
    quantity: Uint128,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    config.minimum_transfer_quantity = quantity;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_minimum_transfer_quantity")
        .add_attribute("quantity", quantity.to_string()))
}

// ============================================================================
// Role Changes
// ============================================================================

/// Transfer ownership.
pub fn execute_change_owner(
    deps: DepsMut,
    info: MessageInfo,
    owner: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    config.owner = deps.api.addr_validate(&owner)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "change_owner")
        .add_attribute("owner", config.owner))
}

/// Change the program (relayer) address.
pub fn execute_change_program(
    deps: DepsMut,
    info: MessageInfo,
    program: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    config.program = deps.api.addr_validate(&program)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "change_program")
        .add_attribute("program", config.program))
}

// ============================================================================
// Native Coin Custody
// ============================================================================

/// Sum of attached funds in the given denom.
pub(crate) fn attached_amount(info: &MessageInfo, denom: &str) -> Uint128 {
    info.funds
        .iter()
        .filter(|coin| coin.denom == denom)
        .map(|coin| coin.amount)
        .sum()
}

/// Deposit native coin into the contract. The attached funds must cover the
/// declared quantity; the coins stay on the contract's bank balance.
pub fn execute_deposit_native(
    deps: DepsMut,
    info: MessageInfo,
    quantity: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    let attached = attached_amount(&info, &config.fee_denom);
    if attached < quantity {
        return Err(ContractError::InsufficientFee {
            expected: quantity,
            got: attached,
        });
    }

    Ok(Response::new()
        .add_attribute("method", "deposit_native")
        .add_attribute("quantity", quantity.to_string()))
}

/// Withdraw native coin from the contract to the owner.
pub fn execute_withdraw_native(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    quantity: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    let balance = deps
        .querier
        .query_balance(&env.contract.address, &config.fee_denom)?;
    if balance.amount < quantity {
        return Err(ContractError::InsufficientBalance);
    }

    let send = CosmosMsg::Bank(BankMsg::Send {
        to_address: config.owner.to_string(),
        amount: vec![Coin {
            denom: config.fee_denom,
            amount: quantity,
        }],
    });

    Ok(Response::new()
        .add_message(send)
        .add_attribute("method", "withdraw_native")
        .add_attribute("quantity", quantity.to_string()))
}
