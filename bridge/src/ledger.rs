//! Transfer ledger: the append-only, index-ordered store of transfer
//! records, with hash-based deduplication and windowed retrieval.
//!
//! Records are keyed by a monotonic sequence index assigned at append time.
//! Two secondary mappings hang off the hash: hash -> index for lookups, and
//! a "seen" marker that doubles as the replay guard for inbound credits
//! (which get a marker but no full record).

use cosmwasm_std::{StdResult, Storage};

use crate::error::ContractError;
use crate::hash::hash_to_hex;
use crate::state::{TransferRecord, SEEN_HASHES, TRANSFERS, TRANSFER_COUNT, TRANSFER_INDEXES};

/// Append a record, returning its assigned sequence index.
///
/// Persists the record, the hash->index mapping, and the seen marker, then
/// increments the counter. A repeated hash overwrites the secondary mappings
/// with the newer index; the records themselves are never overwritten.
pub fn append(storage: &mut dyn Storage, record: &TransferRecord) -> StdResult<u64> {
    let index = TRANSFER_COUNT.load(storage)?;

    TRANSFERS.save(storage, index, record)?;
    TRANSFER_INDEXES.save(storage, &record.hash, &index)?;
    SEEN_HASHES.save(storage, &record.hash, &record.hash)?;
    TRANSFER_COUNT.save(storage, &(index + 1))?;

    Ok(index)
}

/// Record a dedup-only seen marker without a full record.
///
/// Fails with `AlreadyProcessed` if the hash is already marked.
pub fn mark_seen(storage: &mut dyn Storage, hash: &str) -> Result<(), ContractError> {
    if exists(storage, hash)? {
        return Err(ContractError::AlreadyProcessed {
            hash: hash_to_hex(hash),
        });
    }
    SEEN_HASHES.save(storage, hash, &hash.to_string())?;
    Ok(())
}

/// Whether a hash has been seen (full record or dedup-only entry).
///
/// The stored value must equal the queried hash; a marker whose value does
/// not match is treated as absent rather than trusted.
pub fn exists(storage: &dyn Storage, hash: &str) -> StdResult<bool> {
    Ok(match SEEN_HASHES.may_load(storage, hash)? {
        Some(stored) => stored == hash,
        None => false,
    })
}

/// Resolve hash -> index -> record; `None` if either mapping is missing.
pub fn get_by_hash(storage: &dyn Storage, hash: &str) -> StdResult<Option<TransferRecord>> {
    let index = match TRANSFER_INDEXES.may_load(storage, hash)? {
        Some(index) => index,
        None => return Ok(None),
    };
    TRANSFERS.may_load(storage, index)
}

/// Number of records appended so far.
pub fn count(storage: &dyn Storage) -> StdResult<u64> {
    TRANSFER_COUNT.load(storage)
}

/// Page of records counted backward from the most recent, in descending
/// index order. Page 0 is the newest page.
pub fn page(
    storage: &dyn Storage,
    page: u64,
    page_size: u64,
) -> Result<Vec<TransferRecord>, ContractError> {
    let total = TRANSFER_COUNT.load(storage)? as i128;
    let page = page as i128;
    let page_size = page_size as i128;

    // Caller-supplied params can push the span past i128; any overflow is by
    // definition far outside the ledger
    let start = page_size
        .checked_mul(page + 1)
        .and_then(|span| total.checked_sub(span))
        .and_then(|start| start.checked_add(page_size))
        .ok_or(ContractError::OutOfBounds)?;
    if start < 0 || start > total {
        return Err(ContractError::OutOfBounds);
    }
    let end = (start - page_size).max(0);

    let mut records = Vec::with_capacity((start - end) as usize);
    let mut cursor = start;
    while cursor > end {
        if let Some(record) = TRANSFERS.may_load(storage, (cursor - 1) as u64)? {
            records.push(record);
        }
        cursor -= 1;
    }
    Ok(records)
}

/// Up to `n` most recent records in ascending index order (chronological
/// tail). Note the deliberate ordering asymmetry with [`page`].
pub fn last_n(storage: &dyn Storage, n: u64) -> StdResult<Vec<TransferRecord>> {
    let total = TRANSFER_COUNT.load(storage)?;
    let start = total.saturating_sub(n);

    let mut records = Vec::with_capacity((total - start) as usize);
    for index in start..total {
        if let Some(record) = TRANSFERS.may_load(storage, index)? {
            records.push(record);
        }
    }
    Ok(records)
}
