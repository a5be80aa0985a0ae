//! Transfer hash derivation.
//!
//! Hashes must match the records already written by the live deployment, so
//! both the preimage framing and the digest encoding are bit-exact:
//!
//! # Preimage layout (field order: timestamp, address, nonce)
//! - Bytes 0-7:  timestamp (u64, little-endian)
//! - Bytes 8-11: address byte length (u32, little-endian)
//! - Bytes 12-:  address (UTF-8)
//! - last 8:     nonce (u64, little-endian)
//!
//! # Digest encoding
//! The 32 SHA-256 digest bytes are mapped 1:1 to chars (byte value = char
//! code), yielding a 32-char binary string. This is NOT hex or base64; a
//! conventional encoding would not match the stored hashes. `hash_to_hex`
//! exists only for attributes, error messages, and logs.

use sha2::{Digest, Sha256};

/// Compute the deterministic transfer hash for `(timestamp, nonce, address)`.
///
/// Outbound transfers use `nonce = 0`, so two transfers by the same caller
/// in the same block produce identical hashes. Relayers tolerate this.
pub fn compute_transfer_hash(timestamp: u64, nonce: u64, address: &str) -> String {
    let mut data = Vec::with_capacity(8 + 4 + address.len() + 8);
    data.extend_from_slice(&timestamp.to_le_bytes());
    data.extend_from_slice(&(address.len() as u32).to_le_bytes());
    data.extend_from_slice(address.as_bytes());
    data.extend_from_slice(&nonce.to_le_bytes());

    let digest = Sha256::digest(&data);
    digest.iter().map(|&b| b as char).collect()
}

/// Hex form of a binary hash string (for attributes/logging)
pub fn hash_to_hex(hash: &str) -> String {
    let bytes: Vec<u8> = hash.chars().map(|c| c as u8).collect();
    format!("0x{}", hex::encode(bytes))
}
