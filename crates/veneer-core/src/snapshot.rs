//! Snapshot aggregate
//!
//! A `Snapshot` is one consistent view of the three row containers. The
//! committed layer holds the last server-confirmed snapshot; the
//! derivation produces the effective snapshot by replaying pending batches
//! over it. Insertion order in `files` and `file_states` is preserved:
//! Insert appends, Update replaces in place.

use serde::{Deserialize, Serialize};

use crate::model::{File, FileState, User};

/// Aggregate of the user slot, files, and per-user file states
///
/// Derives `PartialEq` deliberately: the committed layer deep-compares
/// incoming snapshots against the stored one to absorb redundant server
/// resends without invalidating downstream derivations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// At most one User record (absent until the server sends one)
    pub user: Option<User>,
    /// File records, keyed by unique `id`
    pub files: Vec<File>,
    /// FileState records, keyed by composite `(file_id, user_id)`
    pub file_states: Vec<FileState>,
}

impl Snapshot {
    /// Create an empty Snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a file by ID
    pub fn file(&self, id: &str) -> Option<&File> {
        self.files.iter().find(|f| f.id == id)
    }

    /// Look up a file state by its composite key
    pub fn file_state(&self, file_id: &str, user_id: &str) -> Option<&FileState> {
        self.file_states.iter().find(|s| s.matches(file_id, user_id))
    }
}
