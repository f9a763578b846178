//! Identity: an id, a display name and a keypair, bound together at creation.

use goofycoin_core::{IdentityId, Keypair, PrivateKey, PublicKey};
use serde::{Deserialize, Serialize};

/// A registered participant.
///
/// Immutable once built. Does not implement `Serialize`; anything that leaves
/// the process goes through [`Identity::summary`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    id: IdentityId,
    display_name: String,
    keypair: Keypair,
}

impl Identity {
    /// Bind an id and name to a keypair.
    pub fn new(id: IdentityId, display_name: impl Into<String>, keypair: Keypair) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            keypair,
        }
    }

    /// The identity's id.
    pub fn id(&self) -> IdentityId {
        self.id
    }

    /// The human-readable name.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The identity's private key.
    pub fn private_key(&self) -> &PrivateKey {
        self.keypair.private_key()
    }

    /// The identity's public key.
    pub fn public_key(&self) -> &PublicKey {
        self.keypair.public_key()
    }

    /// The public view of this identity.
    pub fn summary(&self) -> IdentitySummary {
        IdentitySummary {
            id: self.id,
            name: self.display_name.clone(),
        }
    }
}

/// Public view of an identity: `{ "id": "<uuid>", "name": "<display name>" }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdentitySummary {
    pub id: IdentityId,
    pub name: String,
}

impl From<&Identity> for IdentitySummary {
    fn from(identity: &Identity) -> Self {
        identity.summary()
    }
}
