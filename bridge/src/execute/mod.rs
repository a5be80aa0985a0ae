//! Execute handlers for the CDT Bridge contract, organized by category:
//! - `outgoing` - InitiateTransfer (custody debit, fee split, ledger append)
//! - `incoming` - ApplyTransfers (relayed batch credit with dedup)
//! - `withdraw` - Withdrawal guard and fee sweep
//! - `admin` - Owner setters, role changes, native coin custody

mod admin;
mod incoming;
mod outgoing;
mod withdraw;

pub use admin::*;
pub use incoming::*;
pub use outgoing::*;
pub use withdraw::*;
