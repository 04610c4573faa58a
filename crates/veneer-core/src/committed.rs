//! Committed layer
//!
//! Holds the last snapshot the server confirmed authoritative. Mutated
//! only through `initialize` (full replacement) and `update` (one row
//! update at a time); speculative writes never touch this layer.
//!
//! Every real change bumps a generation counter the derivation cache
//! keys on. Incoming state is deep-compared against the stored value
//! first, so a server resend carrying an unchanged snapshot does not
//! count as a change and does not invalidate downstream derivations.

use crate::apply::apply;
use crate::errors::Result;
use crate::snapshot::Snapshot;
use crate::update::RowUpdate;

/// Authoritative snapshot slot with change tracking
#[derive(Debug, Clone, Default)]
pub struct CommittedLayer {
    snapshot: Option<Snapshot>,
    generation: u64,
}

impl CommittedLayer {
    /// Create an empty, uninitialized layer
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the committed snapshot
    ///
    /// Re-initialization overwrites wholesale; there is no merge. A
    /// snapshot structurally equal to the stored one is absorbed without
    /// bumping the generation.
    pub fn initialize(&mut self, snapshot: Snapshot) {
        if self.snapshot.as_ref() == Some(&snapshot) {
            return;
        }
        self.snapshot = Some(snapshot);
        self.generation += 1;
    }

    /// Get the committed snapshot, absent until initialized
    pub fn get(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    /// Apply one confirmed row update to the committed snapshot
    ///
    /// No-op while uninitialized. An update whose applied result equals
    /// the stored snapshot (e.g. a delete of an absent key) does not bump
    /// the generation.
    ///
    /// # Errors
    ///
    /// `PayloadMismatch` from the row-update algorithm; the stored
    /// snapshot is left untouched.
    pub fn update(&mut self, update: &RowUpdate) -> Result<()> {
        let Some(current) = self.snapshot.as_ref() else {
            return Ok(());
        };

        let next = apply(current, update)?;
        if *current != next {
            self.snapshot = Some(next);
            self.generation += 1;
        }
        Ok(())
    }

    /// Generation counter, bumped on every real change
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
