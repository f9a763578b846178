//! # Goofycoin Testkit
//!
//! Testing utilities for goofycoin.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known record hashes and key derivations that pin the encodings
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: The goofy/alice/bob/claire scenario, ready to use
//!
//! ## Golden Vectors
//!
//! ```rust
//! use goofycoin_testkit::vectors::{all_vectors, record_from_vector};
//!
//! for vector in all_vectors() {
//!     let record = record_from_vector(&vector);
//!     assert_eq!(record.current_hash.to_hex(), vector.expected_hash);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use goofycoin_testkit::generators::{ledger_from_params, ChainParams};
//!
//! proptest! {
//!     #[test]
//!     fn generated_chains_validate(params: ChainParams) {
//!         let ledger = ledger_from_params(&params);
//!         prop_assert!(goofycoin_core::validate_chain(&ledger));
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use goofycoin_testkit::fixtures::ScenarioFixture;
//!
//! let mut fixture = ScenarioFixture::new();
//! fixture.run_standard_scenario().unwrap();
//! assert_eq!(fixture.service.ledger().len(), 3);
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{named_identities, ScenarioFixture};
pub use generators::{ledger_from_params, ChainParams};
pub use vectors::{all_vectors, record_from_vector, verify_all_vectors, GoldenVector};
