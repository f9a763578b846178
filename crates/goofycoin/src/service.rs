//! LedgerService: the identity registry and the ledger behind one API.
//!
//! Mutating ledger operations take `&mut self`. The service does no locking
//! of its own around the ledger; a caller sharing it across tasks wraps it in
//! a single lock.

use bytes::Bytes;
use goofycoin_core::{
    check_link, verify, ChainError, IdentityId, Ledger, Sha256Hash, Signature, TransactionRecord,
};
use goofycoin_registry::{Identity, IdentityStore, IdentitySummary, MemoryRegistry};
use tracing::{debug, info};

use crate::builder::LedgerBuilder;
use crate::error::Result;
use crate::registry::IdentityRegistry;

/// Coin word used in payloads unless configured otherwise.
pub const DEFAULT_COIN_UNIT: &str = "coins";

/// Configuration for the ledger service.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// Reject appends whose previous hash is not the current tail's hash.
    pub strict_linkage: bool,
    /// Unit word in payload descriptions.
    pub coin_unit: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            strict_linkage: false,
            coin_unit: DEFAULT_COIN_UNIT.to_string(),
        }
    }
}

/// The ledger service.
///
/// Provides a unified API for:
/// - Creating identities and looking up their keys
/// - Describing mints and transfers
/// - Appending hash-linked records
/// - Validating the chain
/// - Signing and verifying on behalf of an identity
#[derive(Debug)]
pub struct LedgerService<S: IdentityStore = MemoryRegistry> {
    registry: IdentityRegistry<S>,
    ledger: Ledger,
    config: LedgerConfig,
}

impl LedgerService<MemoryRegistry> {
    /// Create a service with an in-memory registry and an empty ledger.
    pub fn new(config: LedgerConfig) -> Self {
        Self::with_store(MemoryRegistry::new(), config)
    }
}

impl Default for LedgerService<MemoryRegistry> {
    fn default() -> Self {
        Self::new(LedgerConfig::default())
    }
}

impl<S: IdentityStore> LedgerService<S> {
    /// Create a service over a given identity store.
    pub fn with_store(store: S, config: LedgerConfig) -> Self {
        Self::with_registry(IdentityRegistry::new(store), config)
    }

    /// Create a service around an existing identity registry.
    pub fn with_registry(registry: IdentityRegistry<S>, config: LedgerConfig) -> Self {
        Self {
            registry,
            ledger: Ledger::new(),
            config,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Get the identity registry.
    pub fn registry(&self) -> &IdentityRegistry<S> {
        &self.registry
    }

    /// Get the ledger.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// A payload builder using the configured coin unit.
    pub fn builder(&self) -> LedgerBuilder<'_, S> {
        LedgerBuilder::new(&self.registry, &self.config.coin_unit)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Identities
    // ─────────────────────────────────────────────────────────────────────────

    /// Create a new identity.
    pub fn create_identity(&self, display_name: &str) -> Result<Identity> {
        self.registry.create(display_name)
    }

    /// Summaries of all identities in creation order.
    pub fn identities(&self) -> Result<Vec<IdentitySummary>> {
        self.registry.list()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Ledger
    // ─────────────────────────────────────────────────────────────────────────

    /// Append a record with a caller-supplied previous hash.
    ///
    /// With `strict_linkage` off the previous hash is taken as given, and a
    /// wrong value is only noticed by [`Self::verify_chain`]. With it on, a
    /// previous hash other than the tail's fails with `Chain(BrokenLink)`
    /// and nothing is appended.
    pub fn append(
        &mut self,
        payload: impl Into<Bytes>,
        previous_hash: Option<Sha256Hash>,
    ) -> Result<TransactionRecord> {
        if self.config.strict_linkage {
            self.check_tail_link(previous_hash.as_ref())?;
        }

        let record = self.ledger.append(payload, previous_hash).clone();
        debug!(
            index = self.ledger.len() - 1,
            hash = %record.current_hash,
            "appended record"
        );
        Ok(record)
    }

    /// Mint `amount` coins by the genesis identity and append the record.
    pub fn mint(&mut self, minter: &IdentityId, amount: u64) -> Result<TransactionRecord> {
        let payload = self.builder().describe_mint(minter, amount)?;
        let record = self.append_linked(payload)?;
        info!(%minter, amount, "minted");
        Ok(record)
    }

    /// Transfer `amount` coins and append the record.
    pub fn transfer(
        &mut self,
        sender: &IdentityId,
        receiver: &IdentityId,
        amount: u64,
    ) -> Result<TransactionRecord> {
        let payload = self.builder().describe_transfer(sender, receiver, amount)?;
        let record = self.append_linked(payload)?;
        info!(%sender, %receiver, amount, "transferred");
        Ok(record)
    }

    /// Describe an event from an optional sender and receiver, then append it.
    ///
    /// See [`LedgerBuilder::describe`] for how the pair is interpreted.
    pub fn record_event(
        &mut self,
        sender: Option<&IdentityId>,
        receiver: Option<&IdentityId>,
        amount: u64,
    ) -> Result<TransactionRecord> {
        let payload = self.builder().describe(sender, receiver, amount)?;
        self.append_linked(payload)
    }

    /// Check the chain, returning a plain bool.
    pub fn validate_chain(&self) -> bool {
        goofycoin_core::validate_chain(&self.ledger)
    }

    /// Check the chain, reporting the first failure.
    pub fn verify_chain(&self) -> std::result::Result<(), ChainError> {
        goofycoin_core::verify_chain(self.ledger.records())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Signatures
    // ─────────────────────────────────────────────────────────────────────────

    /// Sign `payload` with the private key of `id`.
    pub fn sign_as(&self, id: &IdentityId, payload: &[u8]) -> Result<Signature> {
        let private_key = self.registry.private_key(id)?;
        Ok(private_key.sign(payload)?)
    }

    /// Verify `signature` over `payload` against the public key of `id`.
    pub fn verify_from(
        &self,
        id: &IdentityId,
        payload: &[u8],
        signature: &Signature,
    ) -> Result<bool> {
        let public_key = self.registry.public_key(id)?;
        Ok(verify(&public_key, payload, signature)?)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal Helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn append_linked(&mut self, payload: Bytes) -> Result<TransactionRecord> {
        let previous_hash = self.ledger.tail_hash();
        self.append(payload, previous_hash)
    }

    fn check_tail_link(&self, previous_hash: Option<&Sha256Hash>) -> Result<()> {
        let index = self.ledger.len();
        match (self.ledger.tail_hash(), previous_hash) {
            (Some(tail), given) => check_link(index, &tail, given)?,
            (None, None) => {}
            (None, Some(given)) => {
                return Err(ChainError::BrokenLink {
                    index,
                    expected: "none".to_string(),
                    got: given.to_hex(),
                }
                .into())
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LedgerError;

    fn strict() -> LedgerConfig {
        LedgerConfig {
            strict_linkage: true,
            ..LedgerConfig::default()
        }
    }

    #[test]
    fn test_key_failure_creates_nothing_and_blocks_mint() {
        use goofycoin_core::CoreError;

        let registry = IdentityRegistry::in_memory()
            .with_key_source(|| Err(CoreError::CryptoUnavailable("no entropy".into())));
        let mut service = LedgerService::with_registry(registry, LedgerConfig::default());

        assert!(matches!(
            service.create_identity("goofy"),
            Err(LedgerError::KeyGenerationFailed(_))
        ));
        assert!(service.identities().unwrap().is_empty());

        let stranger = IdentityId::from_bytes([7; 16]);
        assert!(matches!(
            service.mint(&stranger, 10),
            Err(LedgerError::InvalidMinter(_))
        ));
        assert!(service.ledger().is_empty());
    }

    #[test]
    fn test_default_config() {
        let config = LedgerConfig::default();
        assert!(!config.strict_linkage);
        assert_eq!(config.coin_unit, "coins");
    }

    #[test]
    fn test_mint_and_transfer_link_automatically() {
        let mut service = LedgerService::default();
        let goofy = service.create_identity("goofy").unwrap();
        let alice = service.create_identity("alice").unwrap();

        let mint = service.mint(&goofy.id(), 10).unwrap();
        let transfer = service.transfer(&goofy.id(), &alice.id(), 10).unwrap();

        assert!(mint.is_first());
        assert_eq!(transfer.previous_hash, Some(mint.current_hash));
        assert_eq!(service.ledger().len(), 2);
        assert!(service.validate_chain());
    }

    #[test]
    fn test_failed_mint_appends_nothing() {
        let mut service = LedgerService::default();
        service.create_identity("goofy").unwrap();
        let alice = service.create_identity("alice").unwrap();

        assert!(matches!(
            service.mint(&alice.id(), 10),
            Err(LedgerError::InvalidMinter(Some(_)))
        ));
        assert!(service.ledger().is_empty());
    }

    #[test]
    fn test_permissive_append_accepts_wrong_previous_hash() {
        let mut service = LedgerService::default();
        service.append("first", None).unwrap();
        service
            .append("second", Some(Sha256Hash::from_bytes([0x11; 32])))
            .unwrap();

        assert_eq!(service.ledger().len(), 2);
        assert!(!service.validate_chain());
        assert!(matches!(
            service.verify_chain(),
            Err(ChainError::BrokenLink { index: 1, .. })
        ));
    }

    #[test]
    fn test_strict_append_rejects_wrong_previous_hash() {
        let mut service = LedgerService::new(strict());
        let first = service.append("first", None).unwrap();

        let err = service
            .append("second", Some(Sha256Hash::from_bytes([0x11; 32])))
            .unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Chain(ChainError::BrokenLink { index: 1, .. })
        ));
        assert!(matches!(
            service.append("second", None),
            Err(LedgerError::Chain(ChainError::BrokenLink { index: 1, .. }))
        ));
        assert_eq!(service.ledger().len(), 1);

        service.append("second", Some(first.current_hash)).unwrap();
        assert!(service.validate_chain());
    }

    #[test]
    fn test_strict_append_rejects_previous_on_empty_ledger() {
        let mut service = LedgerService::new(strict());
        assert!(matches!(
            service.append("first", Some(Sha256Hash::hash(b"nothing"))),
            Err(LedgerError::Chain(ChainError::BrokenLink { index: 0, .. }))
        ));
        assert!(service.ledger().is_empty());
    }

    #[test]
    fn test_record_event() {
        let mut service = LedgerService::default();
        let goofy = service.create_identity("goofy").unwrap();
        let alice = service.create_identity("alice").unwrap();

        service.record_event(Some(&goofy.id()), None, 10).unwrap();
        service
            .record_event(Some(&goofy.id()), Some(&alice.id()), 4)
            .unwrap();
        assert!(matches!(
            service.record_event(None, Some(&alice.id()), 1),
            Err(LedgerError::InvalidMinter(None))
        ));

        assert_eq!(service.ledger().len(), 2);
        assert!(service.validate_chain());
    }

    #[test]
    fn test_custom_coin_unit() {
        let mut service = LedgerService::new(LedgerConfig {
            coin_unit: "goofs".to_string(),
            ..LedgerConfig::default()
        });
        let alice = service.create_identity("alice").unwrap();
        let bob = service.create_identity("bob").unwrap();

        let record = service.transfer(&alice.id(), &bob.id(), 2).unwrap();
        assert_eq!(record.payload_text(), "alice paid bob 2 goofs");
    }

    #[test]
    fn test_sign_as_and_verify_from() {
        let service = LedgerService::default();
        let alice = service.create_identity("alice").unwrap();
        let bob = service.create_identity("bob").unwrap();

        let signature = service.sign_as(&alice.id(), b"hello").unwrap();
        assert!(service.verify_from(&alice.id(), b"hello", &signature).unwrap());
        assert!(!service.verify_from(&bob.id(), b"hello", &signature).unwrap());
        assert!(!service.verify_from(&alice.id(), b"hellO", &signature).unwrap());
    }

    #[test]
    fn test_sign_as_unknown_identity() {
        let service = LedgerService::default();
        let unknown = IdentityId::from_bytes([5; 16]);
        assert!(matches!(
            service.sign_as(&unknown, b"x"),
            Err(LedgerError::IdentityNotFound(_))
        ));
    }

    #[test]
    fn test_verify_from_malformed_signature() {
        let service = LedgerService::default();
        let alice = service.create_identity("alice").unwrap();
        let zero = Signature::from_bytes([0u8; 64]);
        assert!(matches!(
            service.verify_from(&alice.id(), b"x", &zero),
            Err(LedgerError::InvalidSignatureEncoding(_))
        ));
    }
}
