//! Derivation Cache Tests
//!
//! This test suite verifies the invalidation model of the effective-state
//! derivation: generation counters on both layers, the deep-equality
//! short-circuit on the committed layer, and no-op removals leaving the
//! cache intact.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use chrono::{TimeZone, Utc};
use veneer_core::committed::CommittedLayer;
use veneer_core::effective::DerivationCache;
use veneer_core::pending::PendingLayer;
use veneer_core::{EventKind, File, MutationId, RowPayload, RowUpdate, Snapshot};

fn file(id: &str, name: &str) -> File {
    let t = Utc.timestamp_opt(0, 0).unwrap();
    File {
        id: id.to_string(),
        name: name.to_string(),
        owner_id: "u1".to_string(),
        shared: false,
        created_at: t,
        updated_at: t,
    }
}

fn insert_file(id: &str, name: &str) -> RowUpdate {
    RowUpdate::new(EventKind::Insert, RowPayload::File(file(id, name)))
}

fn snapshot_with(files: &[(&str, &str)]) -> Snapshot {
    let mut snapshot = Snapshot::new();
    for (id, name) in files {
        snapshot.files.push(file(id, name));
    }
    snapshot
}

#[test]
fn test_committed_resend_of_equal_snapshot_does_not_invalidate() {
    // GIVEN an initialized committed layer
    let mut committed = CommittedLayer::new();
    committed.initialize(snapshot_with(&[("f1", "A")]));
    let gen = committed.generation();

    // WHEN the server resends a structurally equal snapshot
    committed.initialize(snapshot_with(&[("f1", "A")]));

    // THEN the generation is untouched and the cache stays warm
    assert_eq!(committed.generation(), gen);
}

#[test]
fn test_changed_snapshot_invalidates() {
    // GIVEN an initialized committed layer
    let mut committed = CommittedLayer::new();
    committed.initialize(snapshot_with(&[("f1", "A")]));
    let gen = committed.generation();

    // WHEN a different snapshot arrives
    committed.initialize(snapshot_with(&[("f1", "A"), ("f2", "B")]));

    // THEN the generation moves
    assert!(committed.generation() > gen);
}

#[test]
fn test_noop_pending_removals_do_not_invalidate() {
    // GIVEN a pending layer with one batch
    let mut pending = PendingLayer::new();
    pending.push(vec![insert_file("f1", "A")], MutationId::from("m1"));
    let gen = pending.generation();

    // WHEN unknown ids are committed and rejected
    pending.commit(&[MutationId::from("m9")]);
    pending.reject(&MutationId::from("m9"));

    // THEN the generation is untouched
    assert_eq!(pending.generation(), gen);
}

#[test]
fn test_cached_value_stable_across_unchanged_reads() {
    // GIVEN a derivation over one pending batch
    let mut committed = CommittedLayer::new();
    committed.initialize(Snapshot::new());
    let mut pending = PendingLayer::new();
    pending.push(vec![insert_file("f1", "A")], MutationId::from("m1"));
    let mut cache = DerivationCache::new();

    // WHEN nothing changes between reads
    let first = cache
        .get_or_derive(&committed, &pending)
        .unwrap()
        .unwrap()
        .clone();
    let second = cache
        .get_or_derive(&committed, &pending)
        .unwrap()
        .unwrap()
        .clone();

    // THEN reads agree
    assert_eq!(first, second);
}

#[test]
fn test_commit_layer_change_invalidates_derivation() {
    // GIVEN a cached effective snapshot
    let mut committed = CommittedLayer::new();
    committed.initialize(Snapshot::new());
    let mut pending = PendingLayer::new();
    pending.push(vec![insert_file("f1", "A")], MutationId::from("m1"));
    let mut cache = DerivationCache::new();
    assert_eq!(
        cache.get_or_derive(&committed, &pending).unwrap().unwrap().files.len(),
        1
    );

    // WHEN the committed layer takes a confirmed change
    committed.update(&insert_file("f2", "B")).unwrap();

    // THEN the next read reflects it
    let effective = cache
        .get_or_derive(&committed, &pending)
        .unwrap()
        .unwrap()
        .clone();
    let ids: Vec<&str> = effective.files.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["f2", "f1"]);
}

#[test]
fn test_retiring_a_batch_invalidates_derivation() {
    // GIVEN a cached effective snapshot with two batches
    let mut committed = CommittedLayer::new();
    committed.initialize(Snapshot::new());
    let mut pending = PendingLayer::new();
    pending.push(vec![insert_file("f1", "A")], MutationId::from("m1"));
    pending.push(vec![insert_file("f2", "B")], MutationId::from("m2"));
    let mut cache = DerivationCache::new();
    assert_eq!(
        cache.get_or_derive(&committed, &pending).unwrap().unwrap().files.len(),
        2
    );

    // WHEN one batch is rejected
    pending.reject(&MutationId::from("m1"));

    // THEN the next read drops its effect
    let effective = cache
        .get_or_derive(&committed, &pending)
        .unwrap()
        .unwrap()
        .clone();
    assert_eq!(effective.files.len(), 1);
    assert_eq!(effective.files[0].id, "f2");
}
