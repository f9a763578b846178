//! IdentityStore trait: the abstract interface for identity storage.

use goofycoin_core::{IdentityId, PrivateKey, PublicKey};

use crate::error::{RegistryError, Result};
use crate::identity::{Identity, IdentitySummary};

/// Storage for identities.
///
/// Implementations are append-only: an identity, once inserted, is never
/// modified or removed, and inserting an id that is already present fails
/// with [`RegistryError::DuplicateId`] without touching the stored entry.
/// The first identity ever inserted is the genesis identity.
pub trait IdentityStore: Send + Sync {
    /// Insert a new identity.
    fn insert(&self, identity: Identity) -> Result<()>;

    /// Get a full identity (including keys) by id.
    fn get(&self, id: &IdentityId) -> Result<Option<Identity>>;

    /// Get the private key of an identity.
    fn private_key(&self, id: &IdentityId) -> Result<Option<PrivateKey>>;

    /// Get the public key of an identity.
    fn public_key(&self, id: &IdentityId) -> Result<Option<PublicKey>>;

    /// Get the display name of an identity.
    fn display_name(&self, id: &IdentityId) -> Result<Option<String>>;

    /// Id of the first identity ever inserted.
    fn genesis_id(&self) -> Result<Option<IdentityId>>;

    /// Summaries of all identities, in insertion order.
    fn list(&self) -> Result<Vec<IdentitySummary>>;

    /// Number of identities.
    fn count(&self) -> Result<usize>;

    /// Check whether an id is registered.
    fn contains(&self, id: &IdentityId) -> Result<bool> {
        Ok(self.display_name(id)?.is_some())
    }
}

/// Lookups that treat an absent id as an error.
pub trait IdentityStoreExt: IdentityStore {
    /// Like [`IdentityStore::private_key`], failing with `IdentityNotFound`.
    fn require_private_key(&self, id: &IdentityId) -> Result<PrivateKey> {
        self.private_key(id)?
            .ok_or(RegistryError::IdentityNotFound(*id))
    }

    /// Like [`IdentityStore::public_key`], failing with `IdentityNotFound`.
    fn require_public_key(&self, id: &IdentityId) -> Result<PublicKey> {
        self.public_key(id)?
            .ok_or(RegistryError::IdentityNotFound(*id))
    }

    /// Like [`IdentityStore::display_name`], failing with `IdentityNotFound`.
    fn require_display_name(&self, id: &IdentityId) -> Result<String> {
        self.display_name(id)?
            .ok_or(RegistryError::IdentityNotFound(*id))
    }
}

impl<S: IdentityStore + ?Sized> IdentityStoreExt for S {}
