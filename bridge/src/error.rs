//! Error types for the CDT Bridge contract

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: caller lacks the required role")]
    Unauthorized,

    #[error("Bridge is paused")]
    BridgePaused,

    // ========================================================================
    // Argument & Funds Errors
    // ========================================================================

    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("Insufficient balance")]
    InsufficientBalance,

    #[error("Insufficient allowance")]
    InsufficientAllowance,

    #[error("Insufficient fee payment: expected {expected}, got {got}")]
    InsufficientFee { expected: Uint128, got: Uint128 },

    #[error("Quantity below minimum transfer quantity {min}")]
    BelowMinimumQuantity { min: Uint128 },

    // ========================================================================
    // Ledger Errors
    // ========================================================================

    #[error("Transfer already processed: {hash}")]
    AlreadyProcessed { hash: String },

    #[error("Page out of bounds")]
    OutOfBounds,

    // ========================================================================
    // Oracle Errors
    // ========================================================================

    #[error("Invalid pool: zero token-out reserve")]
    InvalidPool,

    #[error("Division by zero in fee conversion")]
    DivisionByZero,

    // ========================================================================
    // Withdrawal Guard Errors
    // ========================================================================

    #[error("Lock period not elapsed since unlock request")]
    LockPeriodNotElapsed,

    #[error("Unlock window expired")]
    UnlockWindowExpired,
}
