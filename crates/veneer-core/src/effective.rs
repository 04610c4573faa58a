//! Effective-snapshot derivation
//!
//! The effective (user-visible) snapshot is the committed snapshot with
//! every pending batch folded in, in batch-append order and, within a
//! batch, in update-list order. The fold is recomputed on demand and
//! memoized against the generation counters of both layers, so repeated
//! reads with no intervening change cost nothing beyond the stamp check.

use crate::apply::apply;
use crate::committed::CommittedLayer;
use crate::errors::Result;
use crate::pending::{MutationBatch, PendingLayer};
use crate::snapshot::Snapshot;

/// Memoized derivation of the effective snapshot
#[derive(Debug, Clone, Default)]
pub struct DerivationCache {
    /// Generation pair the cached value was derived from
    stamp: Option<(u64, u64)>,
    value: Option<Snapshot>,
}

impl DerivationCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the effective snapshot, recomputing only if a layer changed
    ///
    /// Absent whenever the committed snapshot is absent, regardless of
    /// pending batches.
    ///
    /// # Errors
    ///
    /// `PayloadMismatch` if a pending update is malformed. The stamp is
    /// not advanced on error, so the same read keeps failing until the
    /// offending batch is removed rather than serving stale state.
    pub fn get_or_derive(
        &mut self,
        committed: &CommittedLayer,
        pending: &PendingLayer,
    ) -> Result<Option<&Snapshot>> {
        let stamp = (committed.generation(), pending.generation());
        if self.stamp != Some(stamp) {
            self.value = derive(committed.get(), pending.batches())?;
            self.stamp = Some(stamp);
        }
        Ok(self.value.as_ref())
    }
}

/// Fold every pending update over the committed snapshot
fn derive(committed: Option<&Snapshot>, batches: &[MutationBatch]) -> Result<Option<Snapshot>> {
    let Some(base) = committed else {
        return Ok(None);
    };

    let mut data = base.clone();
    for batch in batches {
        for update in &batch.updates {
            data = apply(&data, update)?;
        }
    }
    Ok(Some(data))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::model::File;
    use crate::update::{EventKind, RowPayload, RowUpdate};
    use veneer_core_types::MutationId;

    fn insert_file(id: &str) -> RowUpdate {
        RowUpdate::new(
            EventKind::Insert,
            RowPayload::File(File::new(
                id.to_string(),
                "Doc".to_string(),
                "u1".to_string(),
            )),
        )
    }

    #[test]
    fn test_absent_while_uninitialized_despite_pending() {
        let committed = CommittedLayer::new();
        let mut pending = PendingLayer::new();
        pending.push(vec![insert_file("f1")], MutationId::from("m1"));

        let mut cache = DerivationCache::new();
        assert!(cache.get_or_derive(&committed, &pending).unwrap().is_none());
    }

    #[test]
    fn test_folds_batches_over_committed() {
        let mut committed = CommittedLayer::new();
        committed.initialize(Snapshot::new());
        let mut pending = PendingLayer::new();
        pending.push(vec![insert_file("f1")], MutationId::from("m1"));
        pending.push(vec![insert_file("f2")], MutationId::from("m2"));

        let mut cache = DerivationCache::new();
        let effective = cache
            .get_or_derive(&committed, &pending)
            .unwrap()
            .unwrap()
            .clone();

        assert_eq!(effective.files.len(), 2);
        assert_eq!(effective.files[0].id, "f1");
        assert_eq!(effective.files[1].id, "f2");
    }

    #[test]
    fn test_memoized_until_generation_moves() {
        let mut committed = CommittedLayer::new();
        committed.initialize(Snapshot::new());
        let mut pending = PendingLayer::new();
        pending.push(vec![insert_file("f1")], MutationId::from("m1"));

        let mut cache = DerivationCache::new();
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
        assert_eq!(first, second);

        pending.push(vec![insert_file("f2")], MutationId::from("m2"));
        let third = cache
            .get_or_derive(&committed, &pending)
            .unwrap()
            .unwrap()
            .clone();
        assert_eq!(third.files.len(), 2);
    }
}
