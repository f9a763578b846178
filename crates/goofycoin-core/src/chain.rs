//! Ledger: an ordered, append-only chain of transaction records.
//!
//! Insertion order is chain order. The ledger itself does not check that a
//! caller-supplied previous hash matches the tail; that is what
//! [`crate::validation`] is for.

use bytes::Bytes;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::crypto::Sha256Hash;
use crate::transaction::TransactionRecord;

/// The chain of records, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    records: Vec<TransactionRecord>,
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a ledger from records obtained elsewhere.
    ///
    /// Nothing is checked; run [`crate::validation::verify_chain`] on the result.
    /// The first record may point at a predecessor that is not included.
    pub fn from_records(records: Vec<TransactionRecord>) -> Self {
        Self { records }
    }

    /// Append a record stamped with the current time.
    ///
    /// The timestamp never goes below the tail's, so timestamps are
    /// non-decreasing in append order even if the wall clock steps back.
    pub fn append(
        &mut self,
        payload: impl Into<Bytes>,
        previous_hash: Option<Sha256Hash>,
    ) -> &TransactionRecord {
        let floor = self.tail().map_or(i64::MIN, |r| r.timestamp);
        self.append_at(now_secs().max(floor), payload, previous_hash)
    }

    /// Append a record with an explicit timestamp.
    pub fn append_at(
        &mut self,
        timestamp: i64,
        payload: impl Into<Bytes>,
        previous_hash: Option<Sha256Hash>,
    ) -> &TransactionRecord {
        let index = self.records.len();
        self.records
            .push(TransactionRecord::new(timestamp, payload, previous_hash));
        &self.records[index]
    }

    /// The most recent record.
    pub fn tail(&self) -> Option<&TransactionRecord> {
        self.records.last()
    }

    /// Hash of the most recent record, i.e. the correct `previous_hash` for
    /// the next append.
    pub fn tail_hash(&self) -> Option<Sha256Hash> {
        self.tail().map(|r| r.current_hash)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the ledger has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get the record at a position.
    pub fn get(&self, index: usize) -> Option<&TransactionRecord> {
        self.records.get(index)
    }

    /// Iterate records oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, TransactionRecord> {
        self.records.iter()
    }

    /// All records as a slice.
    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    /// Take the records out of the ledger.
    pub fn into_records(self) -> Vec<TransactionRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a TransactionRecord;
    type IntoIter = std::slice::Iter<'a, TransactionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Current time in seconds since the Unix epoch (0 if the clock is before it).
fn now_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
