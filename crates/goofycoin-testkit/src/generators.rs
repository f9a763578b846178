//! Proptest generators for property-based testing.

use proptest::prelude::*;

use goofycoin_core::{IdentityId, Keypair, Ledger, Sha256Hash};

/// Generate a keypair from a random valid scalar.
pub fn keypair() -> impl Strategy<Value = Keypair> {
    any::<[u8; 32]>().prop_filter_map("seed is not a valid P-256 scalar", |seed| {
        Keypair::from_seed(&seed).ok()
    })
}

/// Generate a random Sha256Hash.
pub fn sha256_hash() -> impl Strategy<Value = Sha256Hash> {
    any::<[u8; 32]>().prop_map(Sha256Hash::from_bytes)
}

/// Generate a random IdentityId.
pub fn identity_id() -> impl Strategy<Value = IdentityId> {
    any::<[u8; 16]>().prop_map(IdentityId::from_bytes)
}

/// Generate a reasonable timestamp in seconds.
pub fn timestamp() -> impl Strategy<Value = i64> {
    0i64..=4_102_444_800 // 2100-01-01
}

/// Generate payload bytes of specified max length.
pub fn payload(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Generate a display name.
pub fn display_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9]{0,15}".prop_map(String::from)
}

/// Generate a transfer amount.
pub fn amount() -> impl Strategy<Value = u64> {
    1u64..=1_000_000
}

/// Parameters for generating a linked chain.
#[derive(Debug, Clone)]
pub struct ChainParams {
    /// Timestamp of the first record.
    pub start: i64,
    /// `(seconds after previous record, payload)` per record.
    pub entries: Vec<(u8, Vec<u8>)>,
}

impl Arbitrary for ChainParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            timestamp(),
            prop::collection::vec((any::<u8>(), payload(128)), 1..24),
        )
            .prop_map(|(start, entries)| ChainParams { start, entries })
            .boxed()
    }
}

/// Build a correctly linked ledger from parameters.
pub fn ledger_from_params(params: &ChainParams) -> Ledger {
    let mut ledger = Ledger::new();
    let mut ts = params.start;
    for (gap, payload) in &params.entries {
        ts += i64::from(*gap);
        let prev = ledger.tail_hash();
        ledger.append_at(ts, payload.clone(), prev);
    }
    ledger
}
