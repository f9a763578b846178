//! Error types for the registry.

use goofycoin_core::IdentityId;
use thiserror::Error;

/// Errors that can occur during registry operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No identity with this id.
    #[error("identity not found: {0}")]
    IdentityNotFound(IdentityId),

    /// An identity with this id already exists.
    #[error("duplicate identity id: {0}")]
    DuplicateId(IdentityId),

    /// A thread panicked while holding the registry lock.
    #[error("registry lock poisoned")]
    LockPoisoned,
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
