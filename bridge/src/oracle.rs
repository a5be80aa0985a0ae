//! Price oracle adapter.
//!
//! Derives a spot exchange rate from the CW20 balances a third-party pool
//! holds of two tokens. This is a naive reserves ratio, not a time-weighted
//! price: anyone who can move the pool's reserves in the same transaction
//! context can move this rate. Accepted, documented risk of the design.

use cosmwasm_std::{Addr, QuerierWrapper, StdResult, Uint128};

use crate::error::ContractError;
use crate::state::PRICE_SCALE;

/// Query CW20 token balance
pub fn cw20_balance(
    querier: &QuerierWrapper,
    token: &Addr,
    account: &Addr,
) -> StdResult<Uint128> {
    let response: cw20::BalanceResponse = querier.query_wasm_smart(
        token,
        &cw20::Cw20QueryMsg::Balance {
            address: account.to_string(),
        },
    )?;
    Ok(response.balance)
}

/// Query CW20 allowance granted by `owner` to `spender`
pub fn cw20_allowance(
    querier: &QuerierWrapper,
    token: &Addr,
    owner: &Addr,
    spender: &Addr,
) -> StdResult<Uint128> {
    let response: cw20::AllowanceResponse = querier.query_wasm_smart(
        token,
        &cw20::Cw20QueryMsg::Allowance {
            owner: owner.to_string(),
            spender: spender.to_string(),
        },
    )?;
    Ok(response.allowance)
}

/// Spot price of `token_in` per unit of `token_out` at current pool reserves,
/// scaled by `PRICE_SCALE` (9-decimal fixed point).
///
/// Fails with `InvalidPool` when the pool holds no `token_out`.
pub fn spot_price(
    querier: &QuerierWrapper,
    token_in: &Addr,
    token_out: &Addr,
    pool: &Addr,
) -> Result<Uint128, ContractError> {
    let balance_in = cw20_balance(querier, token_in, pool)?;
    let balance_out = cw20_balance(querier, token_out, pool)?;

    if balance_out.is_zero() {
        return Err(ContractError::InvalidPool);
    }

    Ok(balance_in.multiply_ratio(PRICE_SCALE, balance_out))
}
