//! CDT Bridge Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_apply_transfers, execute_change_owner, execute_change_program, execute_collect_fees,
    execute_deposit_native, execute_initiate_transfer, execute_request_unlock, execute_set_dex,
    execute_set_fees_in_cdt_percentage, execute_set_fees_in_dollar,
    execute_set_minimum_transfer_quantity, execute_set_paused, execute_withdraw,
    execute_withdraw_native,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_collected_fees, query_config, query_dex, query_fee_for_quantity, query_fees_in_native,
    query_last_transfers, query_native_balance, query_spot_price, query_transfer,
    query_transfer_count, query_transfer_exists, query_transfers, query_unlock_request,
};
use crate::state::{
    Config, DexConfig, COLLECTED_FEES, CONFIG, CONTRACT_NAME, CONTRACT_VERSION,
    DEFAULT_LOCK_DURATION, DEFAULT_MINIMUM_TRANSFER_QUANTITY, DEFAULT_UNLOCK_WINDOW, DEX,
    TRANSFER_COUNT, UNLOCK_REQUESTED_AT,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.bridge_chain.is_empty() {
        return Err(ContractError::InvalidArgument {
            reason: "bridge_chain must not be empty".to_string(),
        });
    }
    if msg.fee_denom.is_empty() {
        return Err(ContractError::InvalidArgument {
            reason: "fee_denom must not be empty".to_string(),
        });
    }
    if msg.fees_in_cdt_percentage > 100 {
        return Err(ContractError::InvalidArgument {
            reason: format!("percentage {} exceeds 100", msg.fees_in_cdt_percentage),
        });
    }

    let config = Config {
        bridge_chain: msg.bridge_chain,
        token: deps.api.addr_validate(&msg.token)?,
        owner: info.sender.clone(),
        program: info.sender,
        fee_denom: msg.fee_denom,
        fees_in_dollar: msg.fees_in_dollar,
        fees_in_cdt_percentage: msg.fees_in_cdt_percentage,
        minimum_transfer_quantity: msg
            .minimum_transfer_quantity
            .unwrap_or(Uint128::new(DEFAULT_MINIMUM_TRANSFER_QUANTITY)),
        lock_duration: msg.lock_duration.unwrap_or(DEFAULT_LOCK_DURATION),
        unlock_window: msg.unlock_window.unwrap_or(DEFAULT_UNLOCK_WINDOW),
        paused: false,
    };
    CONFIG.save(deps.storage, &config)?;

    let dex = DexConfig {
        token_in: deps.api.addr_validate(&msg.dex_in)?,
        token_out: deps.api.addr_validate(&msg.dex_out)?,
        pool: deps.api.addr_validate(&msg.dex_pool)?,
    };
    DEX.save(deps.storage, &dex)?;

    COLLECTED_FEES.save(deps.storage, &Uint128::zero())?;
    UNLOCK_REQUESTED_AT.save(deps.storage, &0u64)?;
    TRANSFER_COUNT.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("token", config.token)
        .add_attribute("bridge_chain", config.bridge_chain))
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
        // Settlement
        ExecuteMsg::InitiateTransfer {
            quantity,
            to_chain,
            data,
        } => execute_initiate_transfer(deps, env, info, quantity, to_chain, data),
        ExecuteMsg::ApplyTransfers {
            from_chains,
            recipients,
            amounts,
            hashes,
        } => execute_apply_transfers(deps, info, from_chains, recipients, amounts, hashes),
        ExecuteMsg::CollectFees {} => execute_collect_fees(deps, env, info),

        // Withdrawal guard
        ExecuteMsg::RequestUnlock {} => execute_request_unlock(deps, env, info),
        ExecuteMsg::Withdraw { token, quantity } => {
            execute_withdraw(deps, env, info, token, quantity)
        }

        // Native coin custody
        ExecuteMsg::DepositNative { quantity } => execute_deposit_native(deps, info, quantity),
        ExecuteMsg::WithdrawNative { quantity } => {
            execute_withdraw_native(deps, env, info, quantity)
        }

        // Configuration
        ExecuteMsg::SetFeesInDollar { fees_in_dollar } => {
            execute_set_fees_in_dollar(deps, info, fees_in_dollar)
        }
        ExecuteMsg::SetFeesInCdtPercentage { percentage } => {
            execute_set_fees_in_cdt_percentage(deps, info, percentage)
        }
        ExecuteMsg::SetDex {
            dex_in,
            dex_out,
            dex_pool,
        } => execute_set_dex(deps, info, dex_in, dex_out, dex_pool),
        ExecuteMsg::SetPaused { paused } => execute_set_paused(deps, info, paused),
        ExecuteMsg::SetMinimumTransferQuantity { quantity } => {
            execute_set_minimum_transfer_quantity(deps, info, quantity)
        }
        ExecuteMsg::ChangeOwner { owner } => execute_change_owner(deps, info, owner),
        ExecuteMsg::ChangeProgram { program } => execute_change_program(deps, info, program),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Dex {} => to_json_binary(&query_dex(deps)?),
        QueryMsg::FeesInNative {} => to_json_binary(&query_fees_in_native(deps)?),
        QueryMsg::SpotPrice {
            token_in,
            token_out,
            pool,
        } => to_json_binary(&query_spot_price(deps, token_in, token_out, pool)?),
        QueryMsg::FeeForQuantity { quantity } => {
            to_json_binary(&query_fee_for_quantity(deps, quantity)?)
        }
        QueryMsg::TransferExists { hash } => to_json_binary(&query_transfer_exists(deps, hash)?),
        QueryMsg::Transfer { hash } => to_json_binary(&query_transfer(deps, hash)?),
        QueryMsg::TransferCount {} => to_json_binary(&query_transfer_count(deps)?),
        QueryMsg::Transfers { page, page_size } => {
            to_json_binary(&query_transfers(deps, page, page_size)?)
        }
        QueryMsg::LastTransfers { count } => to_json_binary(&query_last_transfers(deps, count)?),
        QueryMsg::CollectedFees {} => to_json_binary(&query_collected_fees(deps)?),
        QueryMsg::UnlockRequest {} => to_json_binary(&query_unlock_request(deps)?),
        QueryMsg::NativeBalance {} => to_json_binary(&query_native_balance(deps, env)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
