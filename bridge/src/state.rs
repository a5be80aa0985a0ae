//! State definitions for the CDT Bridge contract
//!
//! This module defines the configuration aggregate, the transfer ledger
//! storage maps, and the withdrawal guard state.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Remote chain identifier this bridge is paired with
    pub bridge_chain: String,
    /// Custodied CW20 token (CDT)
    pub token: Addr,
    /// Owner address for contract management
    pub owner: Addr,
    /// Program (relayer/operator) address authorized to apply inbound batches
    pub program: Addr,
    /// Native coin denom used for service fee payment and native custody
    pub fee_denom: String,
    /// Dollar-denominated service fee
    pub fees_in_dollar: Uint128,
    /// Percentage fee in basis of 100, applied as `(quantity / 100) * pct`
    pub fees_in_cdt_percentage: u64,
    /// Minimum outbound transfer quantity (in smallest unit)
    pub minimum_transfer_quantity: Uint128,
    /// Seconds the emergency withdrawal stays locked after an unlock request
    pub lock_duration: u64,
    /// Seconds after the unlock request during which withdrawal is permitted
    pub unlock_window: u64,
    /// Whether the bridge is currently paused
    pub paused: bool,
}

/// Oracle configuration: the pool whose reserves define the spot price
#[cw_serde]
pub struct DexConfig {
    /// Token whose pool balance forms the numerator
    pub token_in: Addr,
    /// Token whose pool balance forms the denominator
    pub token_out: Addr,
    /// Pool address holding both balances
    pub pool: Addr,
}

/// Outbound transfer record, immutable once written
#[cw_serde]
pub struct TransferRecord {
    /// Deterministic transfer hash (binary string, see `hash` module)
    pub hash: String,
    /// Sender address on the source chain
    pub from: String,
    /// Custodied token address
    pub token: String,
    /// Net quantity credited to the recipient (post-fee)
    pub quantity: Uint128,
    /// Source chain identifier
    pub from_chain: String,
    /// Destination chain identifier
    pub to_chain: String,
    /// Fee charged in the custodied token
    pub fees_in_cdt: Uint128,
    /// Fee paid in the native coin
    pub fees_in_native: Uint128,
    /// Creation timestamp (block time, seconds)
    pub block_timestamp: u64,
    /// Destination-chain block number (0 = locally originated, unconfirmed)
    pub block_number: u64,
    /// Opaque payload forwarded to the destination chain
    pub data: String,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:cdt-bridge";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fixed-point scale for oracle prices (9 decimals, matching CDT precision)
pub const PRICE_SCALE: u128 = 1_000_000_000;

/// Default minimum outbound transfer quantity
pub const DEFAULT_MINIMUM_TRANSFER_QUANTITY: u128 = 1_000_000_000;

/// Default lock duration: 2 days in seconds
pub const DEFAULT_LOCK_DURATION: u64 = 172_800;

/// Default unlock validity window: 15 days in seconds
pub const DEFAULT_UNLOCK_WINDOW: u64 = 1_296_000;

// ============================================================================
// Storage
// ============================================================================

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Oracle (dex) configuration
pub const DEX: Item<DexConfig> = Item::new("dex");

/// Running total of CDT fees collected and not yet swept
pub const COLLECTED_FEES: Item<Uint128> = Item::new("collected_fees");

/// Timestamp of the last unlock request (0 = never requested)
pub const UNLOCK_REQUESTED_AT: Item<u64> = Item::new("unlock_requested_at");

/// Monotonic sequence counter for the transfer ledger.
/// Starts at 0, incremented on every append, never reused or decremented.
pub const TRANSFER_COUNT: Item<u64> = Item::new("transfer_count");

/// Transfer ledger, keyed by sequence index
pub const TRANSFERS: Map<u64, TransferRecord> = Map::new("transfers");

/// Secondary index: transfer hash -> sequence index
pub const TRANSFER_INDEXES: Map<&str, u64> = Map::new("transfer_indexes");

/// "Seen" markers keyed by transfer hash. The stored value is the hash
/// itself so presence checks can verify against partial/corrupt entries.
/// Inbound credits get dedup-only entries here with no full record.
pub const SEEN_HASHES: Map<&str, String> = Map::new("seen_hashes");
