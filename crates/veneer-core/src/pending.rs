//! Pending layer
//!
//! An ordered sequence of speculative mutation batches awaiting server
//! acknowledgement. Batches are appended by local writes and removed by
//! commit (acknowledged) or reject (denied); they are never mutated in
//! place and never validated against current state here. Validation
//! happens at replay time in the derivation.
//!
//! Replay order is strictly append order. That is the only conflict
//! rule: later batches win over earlier ones on the same key, and all
//! pending batches win over the committed value.

use veneer_core_types::MutationId;

use crate::update::RowUpdate;

/// One logical client mutation: a named, ordered group of row updates
/// applied atomically as a unit during replay
#[derive(Debug, Clone, PartialEq)]
pub struct MutationBatch {
    /// Identifier pairing this batch with its eventual commit/reject
    pub mutation_id: MutationId,
    /// Row updates in application order
    pub updates: Vec<RowUpdate>,
}

/// Ordered queue of pending batches with change tracking
#[derive(Debug, Clone, Default)]
pub struct PendingLayer {
    batches: Vec<MutationBatch>,
    generation: u64,
}

impl PendingLayer {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a batch to the end of the queue
    ///
    /// Always succeeds; the updates are not validated against current
    /// state. Mutation-id uniqueness among pending batches is a caller
    /// contract.
    pub fn push(&mut self, updates: Vec<RowUpdate>, mutation_id: MutationId) {
        self.batches.push(MutationBatch {
            mutation_id,
            updates,
        });
        self.generation += 1;
    }

    /// Remove every batch whose id is in the set, preserving the
    /// relative order of the remainder
    ///
    /// Idempotent: ids with no pending batch are ignored, and a call
    /// that removes nothing does not count as a change.
    pub fn commit(&mut self, mutation_ids: &[MutationId]) {
        let before = self.batches.len();
        self.batches
            .retain(|b| !mutation_ids.contains(&b.mutation_id));
        if self.batches.len() != before {
            self.generation += 1;
        }
    }

    /// Remove the single batch with the given id
    ///
    /// Idempotent no-op when the id is not pending.
    pub fn reject(&mut self, mutation_id: &MutationId) {
        let before = self.batches.len();
        self.batches.retain(|b| b.mutation_id != *mutation_id);
        if self.batches.len() != before {
            self.generation += 1;
        }
    }

    /// Pending batches in replay (append) order
    pub fn batches(&self) -> &[MutationBatch] {
        &self.batches
    }

    /// Number of pending batches
    pub fn len(&self) -> usize {
        self.batches.len()
    }

    /// Check whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    /// Generation counter, bumped on every real change
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
