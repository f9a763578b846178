//! Error types for goofycoin core.

use thiserror::Error;

/// Errors raised by key generation, signing and verification.
///
/// Messages never carry key material.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("crypto unavailable: {0}")]
    CryptoUnavailable(String),

    #[error("signing failed: {0}")]
    SigningFailed(String),

    #[error("invalid signature encoding: {0}")]
    InvalidSignatureEncoding(String),

    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),
}

/// Chain integrity errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    /// `records[index].previous_hash` does not match the hash of `records[index - 1]`.
    #[error("broken link at index {index}: expected previous hash {expected}, got {got}")]
    BrokenLink {
        index: usize,
        expected: String,
        got: String,
    },

    /// The stored `current_hash` of a record does not match its fields.
    #[error("hash mismatch at index {index}")]
    HashMismatch { index: usize },
}
