//! Message types for the CDT Bridge contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message. The instantiating sender becomes both owner and
/// program until `ChangeOwner` / `ChangeProgram` say otherwise.
#[cw_serde]
pub struct InstantiateMsg {
    /// Remote chain identifier this bridge is paired with
    pub bridge_chain: String,
    /// Custodied CW20 token address
    pub token: String,
    /// Native coin denom for service fee payment
    pub fee_denom: String,
    /// Dollar-denominated service fee
    pub fees_in_dollar: Uint128,
    /// Percentage fee in basis of 100
    pub fees_in_cdt_percentage: u64,
    /// Oracle token-in address
    pub dex_in: String,
    /// Oracle token-out address
    pub dex_out: String,
    /// Oracle pool address
    pub dex_pool: String,
    /// Minimum outbound transfer quantity (default 1_000_000_000)
    pub minimum_transfer_quantity: Option<Uint128>,
    /// Emergency withdrawal lock duration in seconds (default 2 days)
    pub lock_duration: Option<u64>,
    /// Unlock validity window in seconds (default 15 days)
    pub unlock_window: Option<u64>,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Outbound & Inbound Settlement
    // ========================================================================
    /// Record an outbound transfer: debit the caller's CDT into custody,
    /// split fees, append a ledger record. Off-chain relayers deliver on the
    /// destination chain; this contract never does.
    ///
    /// Authorization: Anyone (bridge must be active). Native-coin service
    /// fee must accompany the message.
    InitiateTransfer {
        /// Gross quantity to transfer (fee is deducted from it)
        quantity: Uint128,
        /// Destination chain identifier
        to_chain: String,
        /// Opaque payload forwarded to the destination chain
        data: String,
    },

    /// Credit a relayed batch of inbound transfers. The four arrays are
    /// positionally correlated and must be equal length. A replayed hash
    /// fails the entire batch; nothing is applied partially.
    ///
    /// Authorization: Program or owner
    ApplyTransfers {
        /// Source chain per item
        from_chains: Vec<String>,
        /// Recipient address per item
        recipients: Vec<String>,
        /// Credit amount per item
        amounts: Vec<Uint128>,
        /// Remote transfer hash per item (binary string)
        hashes: Vec<String>,
    },

    /// Sweep accumulated CDT fees to the caller and reset the counter.
    ///
    /// Authorization: Owner only
    CollectFees {},

    // ========================================================================
    // Withdrawal Guard
    // ========================================================================
    /// Stamp the unlock request time, starting the lock period.
    ///
    /// Authorization: Owner only
    RequestUnlock {},

    /// Withdraw custodied tokens to the owner. Only valid more than
    /// `lock_duration` and less than `unlock_window` after `RequestUnlock`.
    /// The request timestamp is not reset afterward.
    ///
    /// Authorization: Owner only
    Withdraw {
        /// CW20 token to withdraw from custody
        token: String,
        /// Quantity to withdraw
        quantity: Uint128,
    },

    // ========================================================================
    // Native Coin Custody
    // ========================================================================
    /// Deposit native coin into the contract (funds must accompany the
    /// message and cover `quantity`).
    ///
    /// Authorization: Owner only
    DepositNative { quantity: Uint128 },

    /// Withdraw native coin from the contract to the owner.
    ///
    /// Authorization: Owner only
    WithdrawNative { quantity: Uint128 },

    // ========================================================================
    // Configuration (owner-only setters)
    // ========================================================================
    /// Set the dollar-denominated service fee
    SetFeesInDollar { fees_in_dollar: Uint128 },

    /// Set the percentage fee (basis of 100)
    SetFeesInCdtPercentage { percentage: u64 },

    /// Set the oracle triple
    SetDex {
        dex_in: String,
        dex_out: String,
        dex_pool: String,
    },

    /// Pause or resume the bridge
    SetPaused { paused: bool },

    /// Set the minimum outbound transfer quantity
    SetMinimumTransferQuantity { quantity: Uint128 },

    /// Transfer ownership
    ChangeOwner { owner: String },

    /// Change the program (relayer) address
    ChangeProgram { program: String },
}

// ============================================================================
// Query Messages
// ============================================================================

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns contract configuration
    #[returns(ConfigResponse)]
    Config {},

    /// Returns the oracle triple
    #[returns(DexResponse)]
    Dex {},

    /// Current native-coin service fee, converted via the oracle
    #[returns(FeesInNativeResponse)]
    FeesInNative {},

    /// Spot price for an arbitrary (token_in, token_out, pool) triple
    #[returns(SpotPriceResponse)]
    SpotPrice {
        token_in: String,
        token_out: String,
        pool: String,
    },

    /// CDT fee that would be charged for a given quantity
    #[returns(FeeForQuantityResponse)]
    FeeForQuantity { quantity: Uint128 },

    /// Whether a transfer hash has been seen (full record or dedup entry)
    #[returns(TransferExistsResponse)]
    TransferExists { hash: String },

    /// Look up a transfer record by hash
    #[returns(Option<TransferRecordResponse>)]
    Transfer { hash: String },

    /// Number of records in the ledger
    #[returns(TransferCountResponse)]
    TransferCount {},

    /// Page of records counted from the most recent backward, descending
    /// index order; page 0 is the newest page
    #[returns(TransfersResponse)]
    Transfers { page: u64, page_size: u64 },

    /// Up to `count` most recent records in ascending index order
    #[returns(TransfersResponse)]
    LastTransfers { count: u64 },

    /// CDT fees accumulated and not yet swept
    #[returns(CollectedFeesResponse)]
    CollectedFees {},

    /// Withdrawal guard state
    #[returns(UnlockRequestResponse)]
    UnlockRequest {},

    /// Native coin balance held by the contract
    #[returns(NativeBalanceResponse)]
    NativeBalance {},
}

// ============================================================================
// Response Types
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub bridge_chain: String,
    pub token: Addr,
    pub owner: Addr,
    pub program: Addr,
    pub fee_denom: String,
    pub fees_in_dollar: Uint128,
    pub fees_in_cdt_percentage: u64,
    pub minimum_transfer_quantity: Uint128,
    pub lock_duration: u64,
    pub unlock_window: u64,
    pub paused: bool,
}

#[cw_serde]
pub struct DexResponse {
    pub token_in: Addr,
    pub token_out: Addr,
    pub pool: Addr,
}

#[cw_serde]
pub struct FeesInNativeResponse {
    pub fee: Uint128,
    pub denom: String,
}

#[cw_serde]
pub struct SpotPriceResponse {
    /// Price scaled by 10^9
    pub price: Uint128,
}

#[cw_serde]
pub struct FeeForQuantityResponse {
    pub quantity: Uint128,
    pub fee: Uint128,
}

#[cw_serde]
pub struct TransferExistsResponse {
    pub exists: bool,
}

#[cw_serde]
pub struct TransferRecordResponse {
    pub hash: String,
    pub from: String,
    pub token: String,
    pub quantity: Uint128,
    pub from_chain: String,
    pub to_chain: String,
    pub fees_in_cdt: Uint128,
    pub fees_in_native: Uint128,
    pub block_timestamp: u64,
    pub block_number: u64,
    pub data: String,
}

#[cw_serde]
pub struct TransferCountResponse {
    pub count: u64,
}

#[cw_serde]
pub struct TransfersResponse {
    pub transfers: Vec<TransferRecordResponse>,
}

#[cw_serde]
pub struct CollectedFeesResponse {
    pub collected: Uint128,
}

#[cw_serde]
pub struct UnlockRequestResponse {
    /// Timestamp of the last unlock request (0 = never requested)
    pub requested_at: u64,
    pub lock_duration: u64,
    pub unlock_window: u64,
}

#[cw_serde]
pub struct NativeBalanceResponse {
    pub denom: String,
    pub amount: Uint128,
}
