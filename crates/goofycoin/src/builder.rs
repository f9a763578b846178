//! LedgerBuilder: turns economic events into payload text.
//!
//! Payload shapes:
//!
//! ```text
//! mint:     "<issuer> created <amount> <unit> with mint-id <uuid>"
//! transfer: "<sender> paid <receiver> <amount> <unit>"
//! ```

use bytes::Bytes;
use goofycoin_core::{random_uuid, IdentityId};
use goofycoin_registry::IdentityStore;

use crate::error::{LedgerError, Result};
use crate::registry::IdentityRegistry;

/// Describes mints and transfers, resolving names through a registry.
pub struct LedgerBuilder<'a, S: IdentityStore> {
    registry: &'a IdentityRegistry<S>,
    unit: &'a str,
}

impl<'a, S: IdentityStore> LedgerBuilder<'a, S> {
    /// Create a builder using `unit` as the coin word.
    pub fn new(registry: &'a IdentityRegistry<S>, unit: &'a str) -> Self {
        Self { registry, unit }
    }

    /// Describe a mint by `minter`.
    ///
    /// Only the genesis identity may mint; anyone else is `InvalidMinter`.
    /// Every mint gets its own random mint-id, so two otherwise identical
    /// mints never share a payload.
    pub fn describe_mint(&self, minter: &IdentityId, amount: u64) -> Result<Bytes> {
        if !self.registry.is_genesis(minter)? {
            return Err(LedgerError::InvalidMinter(Some(*minter)));
        }
        let issuer = self.registry.display_name(minter)?;
        let mint_id = random_uuid()?;
        Ok(format!("{issuer} created {amount} {} with mint-id {mint_id}", self.unit).into())
    }

    /// Describe a transfer from `sender` to `receiver`.
    ///
    /// `amount` is unsigned, so a negative transfer cannot be described at
    /// all; callers parsing signed input reject it before it gets here. Zero
    /// is accepted. No balances are tracked, so nothing checks that the
    /// sender holds `amount`.
    pub fn describe_transfer(
        &self,
        sender: &IdentityId,
        receiver: &IdentityId,
        amount: u64,
    ) -> Result<Bytes> {
        let sender_name = self.registry.display_name(sender)?;
        let receiver_name = self.registry.display_name(receiver)?;
        Ok(format!("{sender_name} paid {receiver_name} {amount} {}", self.unit).into())
    }

    /// Describe an event from an optional sender and receiver.
    ///
    /// | sender  | receiver | result                  |
    /// |---------|----------|-------------------------|
    /// | genesis | none     | mint                    |
    /// | other   | none     | `InvalidMinter(Some)`   |
    /// | some    | some     | transfer                |
    /// | none    | any      | `InvalidMinter(None)`   |
    pub fn describe(
        &self,
        sender: Option<&IdentityId>,
        receiver: Option<&IdentityId>,
        amount: u64,
    ) -> Result<Bytes> {
        match (sender, receiver) {
            (Some(sender), Some(receiver)) => self.describe_transfer(sender, receiver, amount),
            (Some(minter), None) => self.describe_mint(minter, amount),
            (None, _) => Err(LedgerError::InvalidMinter(None)),
        }
    }
}
