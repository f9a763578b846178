//! Chain validation: hash linkage and record seals.
//!
//! Each predecessor's hash is recomputed from its fields rather than read
//! from its `current_hash`, so a record whose payload was changed after the
//! fact breaks the link to its successor.

use crate::chain::Ledger;
use crate::crypto::Sha256Hash;
use crate::error::ChainError;
use crate::transaction::TransactionRecord;

/// Validate a whole chain, reporting the first failure.
///
/// Checks, in order for each adjacent pair `(i - 1, i)`:
/// - `records[i].previous_hash` equals the recomputed hash of `records[i - 1]`
/// - `records[i - 1].current_hash` equals that recomputed hash
///
/// and finally that the tail's stored hash matches its fields. The first
/// record's `previous_hash` is not inspected: a segment cut from a longer
/// chain (see [`Ledger::from_records`]) validates on its own, and so does a
/// first record appended with an arbitrary previous hash.
pub fn verify_chain(records: &[TransactionRecord]) -> Result<(), ChainError> {
    for (index, pair) in records.windows(2).enumerate() {
        let (predecessor, record) = (&pair[0], &pair[1]);
        let recomputed = predecessor.compute_hash();
        check_link(index + 1, &recomputed, record.previous_hash.as_ref())?;
        validate_record(index, predecessor)?;
    }

    if let Some(tail) = records.last() {
        validate_record(records.len() - 1, tail)?;
    }

    Ok(())
}

/// Boolean form of [`verify_chain`] over a ledger.
pub fn validate_chain(ledger: &Ledger) -> bool {
    verify_chain(ledger.records()).is_ok()
}

/// Check that a record's stored hash matches its fields.
pub fn validate_record(index: usize, record: &TransactionRecord) -> Result<(), ChainError> {
    if record.is_sealed_intact() {
        Ok(())
    } else {
        Err(ChainError::HashMismatch { index })
    }
}

/// Check that the record at `index` points at `expected`.
pub fn check_link(
    index: usize,
    expected: &Sha256Hash,
    previous_hash: Option<&Sha256Hash>,
) -> Result<(), ChainError> {
    if previous_hash == Some(expected) {
        return Ok(());
    }
    Err(ChainError::BrokenLink {
        index,
        expected: expected.to_hex(),
        got: previous_hash.map_or_else(|| "none".to_string(), Sha256Hash::to_hex),
    })
}
