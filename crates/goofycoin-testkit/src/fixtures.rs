//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use goofycoin::{LedgerConfig, LedgerService, Result};
use goofycoin_core::TransactionRecord;
use goofycoin_registry::Identity;

/// A service with goofy (genesis), alice, bob and claire already created.
pub struct ScenarioFixture {
    pub service: LedgerService,
    pub goofy: Identity,
    pub alice: Identity,
    pub bob: Identity,
    pub claire: Identity,
}

impl ScenarioFixture {
    /// Create the four identities with the default configuration.
    pub fn new() -> Self {
        Self::with_config(LedgerConfig::default())
    }

    /// Create the four identities with a given configuration.
    ///
    /// Panics if identity creation fails.
    pub fn with_config(config: LedgerConfig) -> Self {
        let service = LedgerService::new(config);
        let mut created = named_identities(&service, &["goofy", "alice", "bob", "claire"]);
        let claire = created.remove(3);
        let bob = created.remove(2);
        let alice = created.remove(1);
        let goofy = created.remove(0);

        Self {
            service,
            goofy,
            alice,
            bob,
            claire,
        }
    }

    /// goofy mints 10, alice pays bob 10, bob pays claire 10.
    pub fn run_standard_scenario(&mut self) -> Result<Vec<TransactionRecord>> {
        Ok(vec![
            self.service.mint(&self.goofy.id(), 10)?,
            self.service.transfer(&self.alice.id(), &self.bob.id(), 10)?,
            self.service.transfer(&self.bob.id(), &self.claire.id(), 10)?,
        ])
    }
}

impl Default for ScenarioFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Create one identity per name, in order.
///
/// Panics if identity creation fails.
pub fn named_identities(service: &LedgerService, names: &[&str]) -> Vec<Identity> {
    names
        .iter()
        .map(|name| {
            service
                .create_identity(name)
                .unwrap_or_else(|e| panic!("creating identity '{name}': {e}"))
        })
        .collect()
}
