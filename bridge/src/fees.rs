//! Fee engine.
//!
//! Two fees apply to every outbound transfer: a percentage fee retained in
//! the custodied token, and a dollar-denominated service fee converted to the
//! native coin through the pool oracle.

use cosmwasm_std::{Deps, StdError, Uint128};

use crate::error::ContractError;
use crate::oracle::spot_price;
use crate::state::{CONFIG, DEX, PRICE_SCALE};

/// Percentage fee in the custodied token.
///
/// Computed as `(quantity / 100) * percentage` — division happens before
/// multiplication, so the result truncates in steps of `percentage` and
/// quantities below 100 units pay no fee at all. This coarser-than-usual
/// rounding is what the live deployment charges and must not be "corrected".
pub fn fee_in_token(quantity: Uint128, percentage: u64) -> Result<Uint128, ContractError> {
    if percentage == 0 {
        return Ok(Uint128::zero());
    }

    let fee = (quantity.u128() / 100)
        .checked_mul(percentage as u128)
        .ok_or_else(|| StdError::generic_err("percentage fee overflow"))?;
    Ok(Uint128::new(fee))
}

/// Service fee in the native coin: `(price * SCALE / fees_in_dollar) * 100`,
/// where `price` is the oracle spot price for the configured dex triple.
pub fn fee_in_native(deps: Deps) -> Result<Uint128, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let dex = DEX.load(deps.storage)?;

    let price = spot_price(&deps.querier, &dex.token_in, &dex.token_out, &dex.pool)?;

    if config.fees_in_dollar.is_zero() {
        return Err(ContractError::DivisionByZero);
    }

    let fee = price
        .multiply_ratio(PRICE_SCALE, config.fees_in_dollar)
        .checked_mul(Uint128::new(100))
        .map_err(StdError::overflow)?;
    Ok(fee)
}
