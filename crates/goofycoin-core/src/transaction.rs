//! Transaction records: the hash-linked entries of the ledger.
//!
//! A record is sealed once, when its hash is computed, and never edited.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::canonical::record_hash;
use crate::crypto::Sha256Hash;

/// One entry of the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Creation time, seconds since the Unix epoch.
    pub timestamp: i64,

    /// Human-readable description of the event (mint or transfer).
    pub payload: Bytes,

    /// Hash of the preceding record (None for the first record).
    pub previous_hash: Option<Sha256Hash>,

    /// SHA-256 over `(timestamp, payload, previous_hash)`, fixed at creation.
    pub current_hash: Sha256Hash,
}

impl TransactionRecord {
    /// Create a record, computing its hash from the other fields.
    pub fn new(timestamp: i64, payload: impl Into<Bytes>, previous_hash: Option<Sha256Hash>) -> Self {
        let payload = payload.into();
        let current_hash = record_hash(timestamp, &payload, previous_hash.as_ref());
        Self {
            timestamp,
            payload,
            previous_hash,
            current_hash,
        }
    }

    /// Recompute the hash from the record's current fields.
    ///
    /// Differs from `current_hash` only if the record was altered after sealing.
    pub fn compute_hash(&self) -> Sha256Hash {
        record_hash(self.timestamp, &self.payload, self.previous_hash.as_ref())
    }

    /// Check whether the stored hash still matches the fields.
    pub fn is_sealed_intact(&self) -> bool {
        self.compute_hash() == self.current_hash
    }

    /// Check if this record claims no predecessor.
    pub fn is_first(&self) -> bool {
        self.previous_hash.is_none()
    }

    /// The payload as text, replacing invalid UTF-8.
    pub fn payload_text(&self) -> String {
        String::from_utf8_lossy(&self.payload).into_owned()
    }
}

/// Builder for creating records.
pub struct TransactionBuilder {
    timestamp: i64,
    payload: Bytes,
    previous_hash: Option<Sha256Hash>,
}

impl TransactionBuilder {
    /// Start building a record.
    pub fn new(payload: impl Into<Bytes>) -> Self {
        Self {
            timestamp: 0,
            payload: payload.into(),
            previous_hash: None,
        }
    }

    /// Set the timestamp.
    pub fn timestamp(mut self, ts: i64) -> Self {
        self.timestamp = ts;
        self
    }

    /// Set the previous hash.
    pub fn prev(mut self, prev: Sha256Hash) -> Self {
        self.previous_hash = Some(prev);
        self
    }

    /// Set or clear the previous hash.
    pub fn prev_opt(mut self, prev: Option<Sha256Hash>) -> Self {
        self.previous_hash = prev;
        self
    }

    /// Compute the hash and produce the record.
    pub fn seal(self) -> TransactionRecord {
        TransactionRecord::new(self.timestamp, self.payload, self.previous_hash)
    }
}
