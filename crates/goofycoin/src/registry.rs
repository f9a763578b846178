//! IdentityRegistry: identity creation and key lookups over an [`IdentityStore`].

use goofycoin_core::{generate_keypair, IdentityId, KeySource, PrivateKey, PublicKey};
use goofycoin_registry::{Identity, IdentityStore, IdentityStoreExt, IdentitySummary, MemoryRegistry};
use tracing::{info, warn};

use crate::error::{LedgerError, Result};

/// Creates identities and answers lookups by id.
///
/// Append-only: there is no update or delete.
#[derive(Debug)]
pub struct IdentityRegistry<S: IdentityStore = MemoryRegistry> {
    store: S,
    key_source: KeySource,
}

impl IdentityRegistry<MemoryRegistry> {
    /// Create a registry backed by process memory.
    pub fn in_memory() -> Self {
        Self::new(MemoryRegistry::new())
    }
}

impl<S: IdentityStore> IdentityRegistry<S> {
    /// Create a registry over the given store, drawing keys from the OS.
    pub fn new(store: S) -> Self {
        Self {
            store,
            key_source: generate_keypair,
        }
    }

    /// Replace the function new identities get their keypairs from.
    pub fn with_key_source(mut self, key_source: KeySource) -> Self {
        self.key_source = key_source;
        self
    }

    /// Get the store reference.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Create an identity with a fresh id and keypair.
    ///
    /// Nothing is inserted unless every step succeeds.
    pub fn create(&self, display_name: &str) -> Result<Identity> {
        let id = IdentityId::random()?;
        let keypair = (self.key_source)().map_err(|e| {
            warn!(name = display_name, error = %e, "key generation failed");
            LedgerError::KeyGenerationFailed(e.to_string())
        })?;

        let identity = Identity::new(id, display_name, keypair);
        self.store.insert(identity.clone())?;

        info!(%id, name = display_name, "created identity");
        Ok(identity)
    }

    /// Get a full identity.
    pub fn get(&self, id: &IdentityId) -> Result<Identity> {
        self.store
            .get(id)?
            .ok_or(LedgerError::IdentityNotFound(*id))
    }

    /// Look up an identity's private key.
    pub fn private_key(&self, id: &IdentityId) -> Result<PrivateKey> {
        Ok(self.store.require_private_key(id)?)
    }

    /// Look up an identity's public key.
    pub fn public_key(&self, id: &IdentityId) -> Result<PublicKey> {
        Ok(self.store.require_public_key(id)?)
    }

    /// Look up an identity's display name.
    pub fn display_name(&self, id: &IdentityId) -> Result<String> {
        Ok(self.store.require_display_name(id)?)
    }

    /// Id of the first identity ever created.
    pub fn genesis_id(&self) -> Result<Option<IdentityId>> {
        Ok(self.store.genesis_id()?)
    }

    /// Check whether `id` is the genesis identity.
    pub fn is_genesis(&self, id: &IdentityId) -> Result<bool> {
        Ok(self.genesis_id()? == Some(*id))
    }

    /// Summaries of all identities in creation order.
    pub fn list(&self) -> Result<Vec<IdentitySummary>> {
        Ok(self.store.list()?)
    }

    /// Number of identities.
    pub fn len(&self) -> Result<usize> {
        Ok(self.store.count()?)
    }

    /// Check if no identity has been created.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl Default for IdentityRegistry<MemoryRegistry> {
    fn default() -> Self {
        Self::in_memory()
    }
}
