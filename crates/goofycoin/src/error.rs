//! Error types for the ledger service.

use goofycoin_core::{ChainError, CoreError, IdentityId};
use goofycoin_registry::RegistryError;
use thiserror::Error;

/// Errors that can occur during ledger service operations.
///
/// Every error is terminal for the call that raised it; nothing is retried.
/// Messages carry ids and names only, never key material.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The operating system's random source could not be read.
    #[error("crypto unavailable: {0}")]
    CryptoUnavailable(String),

    /// Signing failed.
    #[error("signing failed: {0}")]
    SigningFailed(String),

    /// A signature was structurally malformed.
    #[error("invalid signature encoding: {0}")]
    InvalidSignatureEncoding(String),

    /// A key could not be parsed.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// No identity with this id.
    #[error("identity not found: {0}")]
    IdentityNotFound(IdentityId),

    /// The key service failed while creating an identity.
    #[error("key generation failed: {0}")]
    KeyGenerationFailed(String),

    /// A mint was requested by something other than the genesis identity.
    #[error("invalid minter: {}", display_minter(.0))]
    InvalidMinter(Option<IdentityId>),

    /// Registry failure other than a missing identity.
    #[error("registry error: {0}")]
    Registry(RegistryError),

    /// Chain linkage failure.
    #[error("chain error: {0}")]
    Chain(#[from] ChainError),
}

fn display_minter(minter: &Option<IdentityId>) -> String {
    match minter {
        Some(id) => format!("{id} is not the genesis identity"),
        None => "no minting identity given".to_string(),
    }
}

impl From<CoreError> for LedgerError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::CryptoUnavailable(msg) => LedgerError::CryptoUnavailable(msg),
            CoreError::SigningFailed(msg) => LedgerError::SigningFailed(msg),
            CoreError::InvalidSignatureEncoding(msg) => LedgerError::InvalidSignatureEncoding(msg),
            CoreError::InvalidPublicKey(msg) | CoreError::InvalidPrivateKey(msg) => {
                LedgerError::InvalidKey(msg)
            }
        }
    }
}

impl From<RegistryError> for LedgerError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::IdentityNotFound(id) => LedgerError::IdentityNotFound(id),
            other => LedgerError::Registry(other),
        }
    }
}

/// Result type for ledger service operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
