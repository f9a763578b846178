//! # Goofycoin Core
//!
//! Pure primitives for goofycoin: keys, transaction records, and the hash chain.
//!
//! This crate contains no I/O, no storage, no networking. The only outside
//! resource it touches is the operating system's random source, during key
//! generation and signing.
//!
//! ## Key Types
//!
//! - [`Keypair`], [`PrivateKey`], [`PublicKey`], [`Signature`] - ECDSA over NIST P-256
//! - [`Sha256Hash`] - The 32-byte digest linking records together
//! - [`IdentityId`] - Random 128-bit identity token
//! - [`TransactionRecord`] - One hash-linked entry of the ledger
//! - [`Ledger`] - The ordered, append-only chain of records
//!
//! ## Hashing
//!
//! Record hashes are SHA-256 over a fixed preimage. See [`canonical`] module.

pub mod canonical;
pub mod chain;
pub mod crypto;
pub mod error;
pub mod transaction;
pub mod types;
pub mod validation;

pub use canonical::{hash_preimage, record_hash};
pub use chain::Ledger;
pub use crypto::{
    generate_keypair, generate_keypair_with, sign, verify, KeySource, Keypair, PrivateKey,
    PublicKey, Sha256Hash, Signature, MAX_KEYGEN_ATTEMPTS,
};
pub use error::{ChainError, CoreError};
pub use transaction::{TransactionBuilder, TransactionRecord};
pub use types::{random_uuid, IdentityId};
pub use validation::{check_link, validate_chain, validate_record, verify_chain};
