//! # Goofycoin Registry
//!
//! Identity storage for goofycoin. Identities sit behind the
//! [`IdentityStore`] trait so that the service layer does not care where they
//! live; [`MemoryRegistry`] keeps them in process memory.
//!
//! ## Key Types
//!
//! - [`Identity`] - Id, display name and exclusively owned keypair
//! - [`IdentitySummary`] - The only serializable view of an identity
//! - [`IdentityStore`] - The trait for all identity storage operations
//! - [`MemoryRegistry`] - Id-indexed, insertion-ordered in-memory store
//!
//! ## Design Notes
//!
//! - **Append-only**: there is no update or delete.
//! - **No overwrite**: inserting an id that already exists is `DuplicateId`.
//! - **Genesis**: the first identity ever inserted is remembered as the genesis identity.

pub mod error;
pub mod identity;
pub mod memory;
pub mod traits;

pub use error::{RegistryError, Result};
pub use identity::{Identity, IdentitySummary};
pub use memory::MemoryRegistry;
pub use traits::{IdentityStore, IdentityStoreExt};
