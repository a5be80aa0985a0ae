//! CDT Bridge Contract - Transfer Ledger and Fee/Settlement Engine
//!
//! This contract is the accounting and settlement core of a cross-chain CDT
//! bridge: it custodies deposited value, records outbound transfer requests
//! with deterministic fees, and reconciles inbound transfers originated on
//! the remote chain while guaranteeing each remote transfer is credited at
//! most once.
//!
//! # Outbound Flow
//! 1. User approves the bridge on the CDT token and calls `InitiateTransfer`
//!    with the native-coin service fee attached
//! 2. The contract debits the gross quantity into custody, retains the
//!    percentage fee, and appends an immutable ledger record
//! 3. Off-chain relayers read the ledger and deliver on the remote chain
//!
//! # Inbound Flow
//! 1. The program (relayer) observes transfers on the remote chain
//! 2. It submits a batch via `ApplyTransfers`; each item is credited from
//!    custody exactly once, keyed by the remote transfer hash
//!
//! # Security
//! - Hash-based replay protection on inbound credits
//! - Monotonic ledger indexing, records immutable once written
//! - Time-locked emergency withdrawal (request, lock period, validity window)
//! - Emergency pause functionality

pub mod access;
pub mod contract;
pub mod error;
mod execute;
pub mod fees;
pub mod hash;
pub mod ledger;
pub mod msg;
pub mod oracle;
mod query;
pub mod state;

pub use crate::error::ContractError;
pub use crate::hash::compute_transfer_hash;
