//! End-to-end ledger scenarios through the public API.

use bytes::Bytes;
use goofycoin::core::{verify_chain, Ledger};
use goofycoin::{ChainError, LedgerConfig, LedgerError, LedgerService};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("goofycoin=debug")
        .try_init();
}

#[test]
fn goofy_mints_and_coins_move_down_the_line() {
    init_tracing();
    let mut service = LedgerService::new(LedgerConfig::default());

    let goofy = service.create_identity("goofy").unwrap();
    let alice = service.create_identity("alice").unwrap();
    let bob = service.create_identity("bob").unwrap();
    let claire = service.create_identity("claire").unwrap();

    let mint = service.mint(&goofy.id(), 10).unwrap();
    let mint_text = mint.payload_text();
    assert!(mint_text.contains("goofy"));
    assert!(mint_text.contains("10"));

    // Explicit previous hashes, the way an external caller chains appends.
    let payload = service
        .builder()
        .describe_transfer(&alice.id(), &bob.id(), 10)
        .unwrap();
    let tail = service.ledger().tail_hash();
    service.append(payload, tail).unwrap();

    let payload = service
        .builder()
        .describe_transfer(&bob.id(), &claire.id(), 10)
        .unwrap();
    let tail = service.ledger().tail_hash();
    let last = service.append(payload, tail).unwrap();

    assert_eq!(service.ledger().len(), 3);
    assert!(service.validate_chain());
    assert_eq!(last.payload_text(), "bob paid claire 10 coins");

    let names: Vec<_> = service
        .identities()
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, ["goofy", "alice", "bob", "claire"]);
}

#[test]
fn only_genesis_can_mint() {
    init_tracing();
    let mut service = LedgerService::default();
    let _goofy = service.create_identity("goofy").unwrap();
    let alice = service.create_identity("alice").unwrap();

    let err = service.record_event(Some(&alice.id()), None, 10).unwrap_err();
    assert!(matches!(err, LedgerError::InvalidMinter(Some(id)) if id == alice.id()));
    assert!(service.ledger().is_empty());
}

#[test]
fn timestamps_are_non_decreasing() {
    let mut service = LedgerService::default();
    let goofy = service.create_identity("goofy").unwrap();
    for _ in 0..20 {
        service.mint(&goofy.id(), 1).unwrap();
    }

    let stamps: Vec<i64> = service.ledger().iter().map(|r| r.timestamp).collect();
    assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn tampering_after_the_fact_is_detected_at_the_next_link() {
    let mut service = LedgerService::default();
    let goofy = service.create_identity("goofy").unwrap();
    let alice = service.create_identity("alice").unwrap();
    let bob = service.create_identity("bob").unwrap();

    service.mint(&goofy.id(), 10).unwrap();
    service.transfer(&goofy.id(), &alice.id(), 10).unwrap();
    service.transfer(&alice.id(), &bob.id(), 10).unwrap();

    let mut records = service.ledger().records().to_vec();
    records[1].payload = Bytes::from_static(b"goofy paid alice 1000 coins");

    let tampered = Ledger::from_records(records);
    assert!(!goofycoin::core::validate_chain(&tampered));
    assert!(matches!(
        verify_chain(tampered.records()),
        Err(ChainError::BrokenLink { index: 2, .. })
    ));
}

#[test]
fn signatures_bind_to_identities() {
    let service = LedgerService::default();
    let alice = service.create_identity("alice").unwrap();
    let bob = service.create_identity("bob").unwrap();

    let record = b"alice paid bob 10 coins";
    let signature = service.sign_as(&alice.id(), record).unwrap();

    assert!(service.verify_from(&alice.id(), record, &signature).unwrap());
    assert!(!service.verify_from(&bob.id(), record, &signature).unwrap());
}
