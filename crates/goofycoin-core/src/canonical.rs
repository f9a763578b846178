//! The byte encoding that record hashes are computed over.
//!
//! ```text
//! preimage = decimal(timestamp) || payload || previous_hash
//! ```
//!
//! - `decimal(timestamp)` is the base-10 ASCII rendering of the timestamp,
//!   with no padding and no sign for non-negative values.
//! - `||` is plain concatenation. There are no separators or length prefixes.
//! - An absent previous hash contributes zero bytes.
//!
//! This encoding is frozen. Changing it changes every record hash; the golden
//! vectors in `goofycoin-testkit` pin it.

use crate::crypto::Sha256Hash;

/// Build the hash preimage for a record.
pub fn hash_preimage(timestamp: i64, payload: &[u8], previous_hash: Option<&Sha256Hash>) -> Vec<u8> {
    let ts = timestamp.to_string();
    let mut buf = Vec::with_capacity(ts.len() + payload.len() + 32);
    buf.extend_from_slice(ts.as_bytes());
    buf.extend_from_slice(payload);
    if let Some(prev) = previous_hash {
        buf.extend_from_slice(prev.as_bytes());
    }
    buf
}

/// SHA-256 over [`hash_preimage`].
pub fn record_hash(timestamp: i64, payload: &[u8], previous_hash: Option<&Sha256Hash>) -> Sha256Hash {
    Sha256Hash::hash(&hash_preimage(timestamp, payload, previous_hash))
}
