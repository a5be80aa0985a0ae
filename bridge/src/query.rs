//! Query handlers for the CDT Bridge contract.

use cosmwasm_std::{Deps, Env, StdError, StdResult, Uint128};

use crate::error::ContractError;
use crate::fees::{fee_in_native, fee_in_token};
use crate::ledger;
use crate::msg::{
    CollectedFeesResponse, ConfigResponse, DexResponse, FeeForQuantityResponse,
    FeesInNativeResponse, NativeBalanceResponse, SpotPriceResponse, TransferCountResponse,
    TransferExistsResponse, TransferRecordResponse, TransfersResponse, UnlockRequestResponse,
};
use crate::oracle::spot_price;
use crate::state::{TransferRecord, COLLECTED_FEES, CONFIG, DEX, UNLOCK_REQUESTED_AT};

fn to_response(record: TransferRecord) -> TransferRecordResponse {
    TransferRecordResponse {
        hash: record.hash,
        from: record.from,
        token: record.token,
        quantity: record.quantity,
        from_chain: record.from_chain,
        to_chain: record.to_chain,
        fees_in_cdt: record.fees_in_cdt,
        fees_in_native: record.fees_in_native,
        block_timestamp: record.block_timestamp,
        block_number: record.block_number,
        data: record.data,
    }
}

/// Queries surface ContractError variants through StdError.
fn std_err(err: ContractError) -> StdError {
    match err {
        ContractError::Std(e) => e,
        other => StdError::generic_err(other.to_string()),
    }
}

// ============================================================================
// Configuration Queries
// ============================================================================

/// Query contract configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        bridge_chain: config.bridge_chain,
        token: config.token,
        owner: config.owner,
        program: config.program,
        fee_denom: config.fee_denom,
        fees_in_dollar: config.fees_in_dollar,
        fees_in_cdt_percentage: config.fees_in_cdt_percentage,
        minimum_transfer_quantity: config.minimum_transfer_quantity,
        lock_duration: config.lock_duration,
        unlock_window: config.unlock_window,
        paused: config.paused,
    })
}

/// Query the oracle triple.
pub fn query_dex(deps: Deps) -> StdResult<DexResponse> {
    let dex = DEX.load(deps.storage)?;
    Ok(DexResponse {
        token_in: dex.token_in,
        token_out: dex.token_out,
        pool: dex.pool,
    })
}

// ============================================================================
// Fee & Oracle Queries
// ============================================================================

/// Current native-coin service fee, converted through the oracle.
pub fn query_fees_in_native(deps: Deps) -> StdResult<FeesInNativeResponse> {
    let config = CONFIG.load(deps.storage)?;
    let fee = fee_in_native(deps).map_err(std_err)?;
    Ok(FeesInNativeResponse {
        fee,
        denom: config.fee_denom,
    })
}

/// Spot price for an arbitrary (token_in, token_out, pool) triple.
pub fn query_spot_price(
    deps: Deps,
    token_in: String,
    token_out: String,
    pool: String,
) -> StdResult<SpotPriceResponse> {
    let token_in = deps.api.addr_validate(&token_in)?;
    let token_out = deps.api.addr_validate(&token_out)?;
    let pool = deps.api.addr_validate(&pool)?;

    let price = spot_price(&deps.querier, &token_in, &token_out, &pool).map_err(std_err)?;
    Ok(SpotPriceResponse { price })
}

/// CDT fee that would be charged for a given quantity.
pub fn query_fee_for_quantity(deps: Deps, quantity: Uint128) -> StdResult<FeeForQuantityResponse> {
    let config = CONFIG.load(deps.storage)?;
    let fee = fee_in_token(quantity, config.fees_in_cdt_percentage).map_err(std_err)?;
    Ok(FeeForQuantityResponse { quantity, fee })
}

/// CDT fees accumulated and not yet swept.
pub fn query_collected_fees(deps: Deps) -> StdResult<CollectedFeesResponse> {
    let collected = COLLECTED_FEES.load(deps.storage)?;
    Ok(CollectedFeesResponse { collected })
}

// ============================================================================
// Ledger Queries
// ============================================================================

/// Whether a transfer hash has been seen.
pub fn query_transfer_exists(deps: Deps, hash: String) -> StdResult<TransferExistsResponse> {
    let exists = ledger::exists(deps.storage, &hash)?;
    Ok(TransferExistsResponse { exists })
}

/// Look up a transfer record by hash.
pub fn query_transfer(deps: Deps, hash: String) -> StdResult<Option<TransferRecordResponse>> {
    let record = ledger::get_by_hash(deps.storage, &hash)?;
    Ok(record.map(to_response))
}

/// Number of records in the ledger.
pub fn query_transfer_count(deps: Deps) -> StdResult<TransferCountResponse> {
    let count = ledger::count(deps.storage)?;
    Ok(TransferCountResponse { count })
}

/// Page of records counted from the most recent backward (descending).
pub fn query_transfers(deps: Deps, page: u64, page_size: u64) -> StdResult<TransfersResponse> {
    let records = ledger::page(deps.storage, page, page_size).map_err(std_err)?;
    Ok(TransfersResponse {
        transfers: records.into_iter().map(to_response).collect(),
    })
}

/// Up to `count` most recent records in ascending index order.
pub fn query_last_transfers(deps: Deps, count: u64) -> StdResult<TransfersResponse> {
    let records = ledger::last_n(deps.storage, count)?;
    Ok(TransfersResponse {
        transfers: records.into_iter().map(to_response).collect(),
    })
}

// ============================================================================
// Withdrawal Guard & Balance Queries
// ============================================================================

/// Withdrawal guard state.
pub fn query_unlock_request(deps: Deps) -> StdResult<UnlockRequestResponse> {
    let config = CONFIG.load(deps.storage)?;
    let requested_at = UNLOCK_REQUESTED_AT.load(deps.storage)?;
    Ok(UnlockRequestResponse {
        requested_at,
        lock_duration: config.lock_duration,
        unlock_window: config.unlock_window,
    })
}

/// Native coin balance held by the contract.
pub fn query_native_balance(deps: Deps, env: Env) -> StdResult<NativeBalanceResponse> {
    let config = CONFIG.load(deps.storage)?;
    let balance = deps
        .querier
        .query_balance(env.contract.address, &config.fee_denom)?;
    Ok(NativeBalanceResponse {
        denom: balance.denom,
        amount: balance.amount,
    })
}
