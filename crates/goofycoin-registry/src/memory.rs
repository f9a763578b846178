//! In-memory implementation of the IdentityStore trait.
//!
//! Identities live for the lifetime of the process. Lookups go through an
//! id index; a separate vector keeps insertion order for listing.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use goofycoin_core::{IdentityId, PrivateKey, PublicKey};
use tracing::debug;

use crate::error::{RegistryError, Result};
use crate::identity::{Identity, IdentitySummary};
use crate::traits::IdentityStore;

/// In-memory identity store. Thread-safe via RwLock.
pub struct MemoryRegistry {
    inner: RwLock<MemoryRegistryInner>,
}

#[derive(Default)]
struct MemoryRegistryInner {
    /// Identities in insertion order.
    identities: Vec<Identity>,

    /// id -> position in `identities`.
    index: HashMap<IdentityId, usize>,

    /// Recorded once, on the first insert.
    genesis: Option<IdentityId>,
}

impl MemoryRegistryInner {
    fn lookup(&self, id: &IdentityId) -> Option<&Identity> {
        self.index.get(id).map(|&pos| &self.identities[pos])
    }
}

impl MemoryRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(MemoryRegistryInner::default()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, MemoryRegistryInner>> {
        self.inner.read().map_err(|_| RegistryError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, MemoryRegistryInner>> {
        self.inner.write().map_err(|_| RegistryError::LockPoisoned)
    }
}

impl Default for MemoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MemoryRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.read().map(|inner| inner.identities.len()).ok();
        f.debug_struct("MemoryRegistry").field("count", &count).finish()
    }
}

impl IdentityStore for MemoryRegistry {
    fn insert(&self, identity: Identity) -> Result<()> {
        let mut inner = self.write()?;
        let id = identity.id();

        if inner.index.contains_key(&id) {
            return Err(RegistryError::DuplicateId(id));
        }

        let position = inner.identities.len();
        inner.identities.push(identity);
        inner.index.insert(id, position);
        if inner.genesis.is_none() {
            inner.genesis = Some(id);
            debug!(%id, "recorded genesis identity");
        }

        Ok(())
    }

    fn get(&self, id: &IdentityId) -> Result<Option<Identity>> {
        let inner = self.read()?;
        Ok(inner.lookup(id).cloned())
    }

    fn private_key(&self, id: &IdentityId) -> Result<Option<PrivateKey>> {
        let inner = self.read()?;
        Ok(inner.lookup(id).map(|identity| identity.private_key().clone()))
    }

    fn public_key(&self, id: &IdentityId) -> Result<Option<PublicKey>> {
        let inner = self.read()?;
        Ok(inner.lookup(id).map(|identity| identity.public_key().clone()))
    }

    fn display_name(&self, id: &IdentityId) -> Result<Option<String>> {
        let inner = self.read()?;
        Ok(inner.lookup(id).map(|identity| identity.display_name().to_string()))
    }

    fn genesis_id(&self) -> Result<Option<IdentityId>> {
        Ok(self.read()?.genesis)
    }

    fn list(&self) -> Result<Vec<IdentitySummary>> {
        let inner = self.read()?;
        Ok(inner.identities.iter().map(Identity::summary).collect())
    }

    fn count(&self) -> Result<usize> {
        Ok(self.read()?.identities.len())
    }

    fn contains(&self, id: &IdentityId) -> Result<bool> {
        Ok(self.read()?.index.contains_key(id))
    }
}
