//! Public store API
//!
//! `LayeredStore` composes the committed layer, the pending layer, and
//! the derivation cache behind the four contract surfaces: transport
//! feeds `initialize`/`update_committed`/`commit_mutations`/
//! `reject_mutation`, the local mutation layer feeds `push_batch`, and
//! consumers read `committed`/`effective`.
//!
//! The store is an explicitly constructed, explicitly owned object:
//! build one at session start, drop it at session end. All operations
//! are synchronous and run to completion, so a reader never observes a
//! partially folded effective snapshot. The store itself is not
//! internally synchronized; a multi-threaded host must wrap the whole
//! instance in one exclusive lock, since committed value, pending queue,
//! and cache have to be observed together.

use std::time::Instant;

use veneer_core_types::MutationId;

use crate::committed::CommittedLayer;
use crate::effective::DerivationCache;
use crate::errors::Result;
use crate::pending::PendingLayer;
use crate::snapshot::Snapshot;
use crate::update::RowUpdate;
use crate::{log_op_end, log_op_error, log_op_start};

/// Dual-layer optimistic store over a committed snapshot
#[derive(Debug, Clone, Default)]
pub struct LayeredStore {
    committed: CommittedLayer,
    pending: PendingLayer,
    cache: DerivationCache,
}

impl LayeredStore {
    /// Create an empty, uninitialized store
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the committed snapshot (startup or reconnect)
    ///
    /// Re-initialization overwrites wholesale. A structurally equal
    /// snapshot is absorbed without invalidating the derivation.
    pub fn initialize(&mut self, snapshot: Snapshot) {
        log_op_start!("initialize");
        let start = Instant::now();
        self.committed.initialize(snapshot);
        log_op_end!("initialize", duration_ms = start.elapsed().as_millis() as u64);
    }

    /// The last server-confirmed snapshot, absent until initialized
    pub fn committed(&self) -> Option<&Snapshot> {
        self.committed.get()
    }

    /// Apply one confirmed server change to the committed layer
    ///
    /// No-op while uninitialized. The pending queue is untouched;
    /// pairing this with `commit_mutations` for the acknowledged batch
    /// is the caller's responsibility (in either order).
    ///
    /// # Errors
    ///
    /// `PayloadMismatch` when the update's payload variant disagrees
    /// with its declared table; the store is left unchanged.
    pub fn update_committed(&mut self, update: &RowUpdate) -> Result<()> {
        let start = Instant::now();
        log_op_start!(
            "update_committed",
            table = %update.table,
            row_event = %update.event
        );
        match self.committed.update(update) {
            Ok(()) => {
                log_op_end!(
                    "update_committed",
                    duration_ms = start.elapsed().as_millis() as u64
                );
                Ok(())
            }
            Err(err) => {
                log_op_error!(
                    "update_committed",
                    err,
                    duration_ms = start.elapsed().as_millis() as u64
                );
                Err(err)
            }
        }
    }

    /// The effective (user-visible) snapshot: committed state with all
    /// pending batches folded in, memoized until either layer changes
    ///
    /// Absent whenever the committed snapshot is absent.
    ///
    /// # Errors
    ///
    /// `PayloadMismatch` from a malformed pending update. The error
    /// persists across reads until the offending batch is rejected.
    pub fn effective(&mut self) -> Result<Option<&Snapshot>> {
        let Self {
            committed,
            pending,
            cache,
        } = self;
        cache.get_or_derive(committed, pending)
    }

    /// Append a speculative mutation batch
    ///
    /// Always succeeds; updates are validated only at replay time. The
    /// caller pairs each pushed id with exactly one later
    /// `commit_mutations`/`reject_mutation`.
    pub fn push_batch(&mut self, updates: Vec<RowUpdate>, mutation_id: MutationId) {
        let start = Instant::now();
        log_op_start!(
            "push_batch",
            mutation_id = mutation_id.as_str(),
            update_count = updates.len()
        );
        self.pending.push(updates, mutation_id);
        log_op_end!(
            "push_batch",
            duration_ms = start.elapsed().as_millis() as u64,
            pending_len = self.pending.len()
        );
    }

    /// Remove acknowledged batches from the pending queue
    ///
    /// Idempotent for unknown ids. The corresponding committed-layer
    /// update must also arrive via `update_committed` so the effective
    /// state does not visibly regress.
    pub fn commit_mutations(&mut self, mutation_ids: &[MutationId]) {
        let start = Instant::now();
        log_op_start!("commit_mutations", update_count = mutation_ids.len());
        self.pending.commit(mutation_ids);
        log_op_end!(
            "commit_mutations",
            duration_ms = start.elapsed().as_millis() as u64,
            pending_len = self.pending.len()
        );
    }

    /// Discard a rejected batch, leaving the committed layer alone
    ///
    /// Idempotent no-op for unknown ids.
    pub fn reject_mutation(&mut self, mutation_id: &MutationId) {
        let start = Instant::now();
        log_op_start!("reject_mutation", mutation_id = mutation_id.as_str());
        self.pending.reject(mutation_id);
        log_op_end!(
            "reject_mutation",
            duration_ms = start.elapsed().as_millis() as u64,
            pending_len = self.pending.len()
        );
    }

    /// Number of batches currently pending
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::model::File;
    use crate::update::{EventKind, RowPayload};

    fn insert_file(id: &str, name: &str) -> RowUpdate {
        RowUpdate::new(
            EventKind::Insert,
            RowPayload::File(File::new(
                id.to_string(),
                name.to_string(),
                "u1".to_string(),
            )),
        )
    }

    #[test]
    fn test_reads_absent_before_initialize() {
        let mut store = LayeredStore::new();
        store.push_batch(vec![insert_file("f1", "A")], MutationId::from("m1"));

        assert!(store.committed().is_none());
        assert!(store.effective().unwrap().is_none());
    }

    #[test]
    fn test_speculative_write_visible_in_effective_only() {
        let mut store = LayeredStore::new();
        store.initialize(Snapshot::new());
        store.push_batch(vec![insert_file("f1", "A")], MutationId::from("m1"));

        assert!(store.committed().unwrap().files.is_empty());
        assert_eq!(store.effective().unwrap().unwrap().files.len(), 1);
    }

    #[test]
    fn test_reject_restores_committed_view() {
        let mut store = LayeredStore::new();
        store.initialize(Snapshot::new());
        store.push_batch(vec![insert_file("f1", "A")], MutationId::from("m1"));

        store.reject_mutation(&MutationId::from("m1"));

        let effective = store.effective().unwrap().unwrap().clone();
        assert_eq!(Some(&effective), store.committed());
    }

    #[test]
    fn test_pending_len_tracks_queue() {
        let mut store = LayeredStore::new();
        store.push_batch(Vec::new(), MutationId::from("m1"));
        store.push_batch(Vec::new(), MutationId::from("m2"));
        assert_eq!(store.pending_len(), 2);

        store.commit_mutations(&[MutationId::from("m1")]);
        assert_eq!(store.pending_len(), 1);
    }
}
