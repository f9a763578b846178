//! # Goofycoin
//!
//! A minimal append-only transaction ledger with per-user P-256 identities.
//! Each record carries a descriptive payload and the hash of the record
//! before it, forming a singly linked SHA-256 hash chain.
//!
//! ## Overview
//!
//! - **Identities**: created by [`IdentityRegistry`], each with its own keypair
//! - **Payloads**: [`LedgerBuilder`] describes mints and transfers by name
//! - **Ledger**: [`LedgerService`] appends records and validates the chain
//!
//! Only the first identity ever created (the genesis identity) may mint.
//!
//! ## Usage
//!
//! ```rust
//! use goofycoin::{LedgerConfig, LedgerService};
//!
//! let mut service = LedgerService::new(LedgerConfig::default());
//! let goofy = service.create_identity("goofy").unwrap();
//! let alice = service.create_identity("alice").unwrap();
//!
//! service.mint(&goofy.id(), 10).unwrap();
//! service.transfer(&goofy.id(), &alice.id(), 10).unwrap();
//!
//! assert_eq!(service.ledger().len(), 2);
//! assert!(service.validate_chain());
//! ```
//!
//! ## Re-exports
//!
//! - `goofycoin::core` - Keys, hashes, records and the chain
//! - `goofycoin::store` - Identity storage

pub mod builder;
pub mod error;
pub mod registry;
pub mod service;

// Re-export component crates
pub use goofycoin_core as core;
pub use goofycoin_registry as store;

// Re-export main types for convenience
pub use builder::LedgerBuilder;
pub use error::{LedgerError, Result};
pub use registry::IdentityRegistry;
pub use service::{LedgerConfig, LedgerService, DEFAULT_COIN_UNIT};

// Re-export commonly used types
pub use goofycoin_core::{
    ChainError, IdentityId, Keypair, Ledger, PrivateKey, PublicKey, Sha256Hash, Signature,
    TransactionRecord,
};
pub use goofycoin_registry::{Identity, IdentityStore, IdentitySummary, MemoryRegistry};
