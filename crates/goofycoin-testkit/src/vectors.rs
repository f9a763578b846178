//! Golden test vectors for the record hash and key derivation.
//!
//! Every value here was computed independently of this codebase. If one of
//! these stops matching, the record hash encoding has changed.

use goofycoin_core::{Keypair, Sha256Hash, TransactionRecord};

/// A golden record-hash vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Timestamp, seconds.
    pub timestamp: i64,
    /// Payload bytes.
    pub payload: &'static [u8],
    /// Previous hash (hex), if any.
    pub previous_hash: Option<&'static str>,
    /// Expected current hash (hex).
    pub expected_hash: &'static str,
}

/// Mint payload used by the chained vectors.
pub const MINT_PAYLOAD: &[u8] =
    b"goofy created 10 coins with mint-id 00000000-0000-4000-8000-000000000001";

const MINT_HASH: &str = "0d21e8b4da3a37c2428dcb37eb32af0b209fe3817452d4f721d9a475e03f96d0";
const ALICE_TO_BOB_HASH: &str = "487982d41e6c7a974f8487886d59d86b9732934891acc19eab935d0846c9d9de";
const BOB_TO_CLAIRE_HASH: &str = "e41ecf59ccb8b3a45498b2b872faee3742e01c92eff399d5fdeb5e89149aa375";

/// Get all golden record vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "zero timestamp, empty payload",
            timestamp: 0,
            payload: b"",
            previous_hash: None,
            expected_hash: "5feceb66ffc86f38d952786c6d696c79c2dbc239dd4e91b46729d73a27fb57e9",
        },
        GoldenVector {
            name: "timestamp only",
            timestamp: 1,
            payload: b"",
            previous_hash: None,
            expected_hash: "6b86b273ff34fce19d6b804eff5a3f5747ada4eaa22f1d49c01e52ddb7875b4b",
        },
        GoldenVector {
            name: "timestamp and payload",
            timestamp: 1,
            payload: b"23",
            previous_hash: None,
            expected_hash: "a665a45920422f9d417e4867efdc4fb8a04a1f3fff1fa07e998e86f7f7a27ae3",
        },
        // No separators: (12, "3") has the same preimage as (1, "23").
        GoldenVector {
            name: "shifted boundary, same preimage",
            timestamp: 12,
            payload: b"3",
            previous_hash: None,
            expected_hash: "a665a45920422f9d417e4867efdc4fb8a04a1f3fff1fa07e998e86f7f7a27ae3",
        },
        GoldenVector {
            name: "negative timestamp",
            timestamp: -1,
            payload: b"x",
            previous_hash: None,
            expected_hash: "0930c831f4072724b5b2517b412684ba0292b2d23723d4ca9ef826d84fa6b05c",
        },
        GoldenVector {
            name: "genesis mint",
            timestamp: 1_700_000_000,
            payload: MINT_PAYLOAD,
            previous_hash: None,
            expected_hash: MINT_HASH,
        },
        GoldenVector {
            name: "alice pays bob",
            timestamp: 1_700_000_001,
            payload: b"alice paid bob 10 coins",
            previous_hash: Some(MINT_HASH),
            expected_hash: ALICE_TO_BOB_HASH,
        },
        GoldenVector {
            name: "bob pays claire",
            timestamp: 1_700_000_002,
            payload: b"bob paid claire 10 coins",
            previous_hash: Some(ALICE_TO_BOB_HASH),
            expected_hash: BOB_TO_CLAIRE_HASH,
        },
    ]
}

/// Build the record a vector describes.
///
/// Panics on a malformed `previous_hash`; vectors are static test data.
pub fn record_from_vector(vector: &GoldenVector) -> TransactionRecord {
    let previous = vector.previous_hash.map(|hex| {
        Sha256Hash::from_hex(hex).unwrap_or_else(|e| panic!("vector '{}': {e}", vector.name))
    });
    TransactionRecord::new(vector.timestamp, vector.payload, previous)
}

/// Check every vector, returning `(name, matches, computed hash)`.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let hex = record_from_vector(v).current_hash.to_hex();
            (v.name.to_string(), hex == v.expected_hash, hex)
        })
        .collect()
}

/// A golden public-key derivation vector.
#[derive(Debug, Clone)]
pub struct KeyVector {
    pub name: &'static str,
    pub seed: [u8; 32],
    /// Compressed SEC1 public key (hex).
    pub expected_public_key: &'static str,
}

/// Get all key derivation vectors.
pub fn key_vectors() -> Vec<KeyVector> {
    let mut one = [0u8; 32];
    one[31] = 1;

    vec![
        KeyVector {
            name: "scalar one is the generator",
            seed: one,
            expected_public_key: "036b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296",
        },
        KeyVector {
            name: "repeated 0x01",
            seed: [0x01; 32],
            expected_public_key: "026ff03b949241ce1dadd43519e6960e0a85b41a69a05c328103aa2bce1594ca16",
        },
        KeyVector {
            name: "repeated 0x42",
            seed: [0x42; 32],
            expected_public_key: "033ad3861a95621392516bb593ef05583ed2e5866f5cb6260a3017237fd89b90af",
        },
    ]
}

/// Derive the public key (compressed SEC1 hex) for a key vector.
///
/// Panics if the seed is not a valid scalar.
pub fn public_key_from_vector(vector: &KeyVector) -> String {
    Keypair::from_seed(&vector.seed)
        .unwrap_or_else(|e| panic!("vector '{}': {e}", vector.name))
        .public_key()
        .to_hex()
}
