//! Row-update application
//!
//! This module provides the `apply()` function, the pure leaf algorithm
//! the committed layer and the derivation both fold over.
//!
//! ## Contract
//!
//! - **Pure**: never mutates its input; returns a new Snapshot value
//! - **Total over valid input**: missing key on Update/Delete and
//!   duplicate key on Insert degrade to best-effort behavior (replace
//!   nothing / append anyway), so replay races between layers never fail
//! - **Loud on contract violations**: a payload variant that disagrees
//!   with the update's declared table returns a typed error and leaves
//!   the input untouched
//!
//! ## Example
//!
//! ```
//! use veneer_core::{apply, Snapshot};
//! use veneer_core::model::File;
//! use veneer_core::update::{EventKind, RowPayload, RowUpdate};
//!
//! let snapshot = Snapshot::new();
//! let file = File::new("f1".to_string(), "Doc".to_string(), "u1".to_string());
//! let update = RowUpdate::new(EventKind::Insert, RowPayload::File(file));
//!
//! let next = apply(&snapshot, &update).unwrap();
//! assert_eq!(next.files.len(), 1);
//! assert!(snapshot.files.is_empty());
//! ```

use crate::errors::{Result, VeneerError};
use crate::model::{File, FileState, User};
use crate::snapshot::Snapshot;
use crate::update::{EventKind, RowPayload, RowUpdate, TableKind};

/// Apply a single row update to a snapshot, returning the new snapshot
///
/// Policy by table:
/// - `User`: replace the singleton slot with the payload row. The event
///   discriminator is not consulted for this table: any event kind,
///   Delete included, results in replacement, never removal.
/// - `File`: Delete removes the entry with matching `id`; Update replaces
///   the entry with matching `id` (no-op when absent); Insert appends.
/// - `FileState`: the same three-way policy keyed by `(file_id, user_id)`.
///
/// # Errors
///
/// `PayloadMismatch` when `update.row` carries a variant other than the
/// one `update.table` requires. The input snapshot is never modified.
pub fn apply(snapshot: &Snapshot, update: &RowUpdate) -> Result<Snapshot> {
    match update.table {
        TableKind::User => {
            let user = expect_user(update)?;
            Ok(apply_user(snapshot, user))
        }
        TableKind::File => {
            let file = expect_file(update)?;
            Ok(apply_file(snapshot, update.event, file))
        }
        TableKind::FileState => {
            let state = expect_file_state(update)?;
            Ok(apply_file_state(snapshot, update.event, state))
        }
    }
}

/// Replace the user slot unconditionally
///
/// Deliberately event-insensitive: a Delete event replaces the slot like
/// any other, it does not clear it.
fn apply_user(snapshot: &Snapshot, user: &User) -> Snapshot {
    Snapshot {
        user: Some(user.clone()),
        files: snapshot.files.clone(),
        file_states: snapshot.file_states.clone(),
    }
}

fn apply_file(snapshot: &Snapshot, event: EventKind, file: &File) -> Snapshot {
    let files = match event {
        EventKind::Delete => snapshot
            .files
            .iter()
            .filter(|f| f.id != file.id)
            .cloned()
            .collect(),
        EventKind::Update => snapshot
            .files
            .iter()
            .map(|f| if f.id == file.id { file.clone() } else { f.clone() })
            .collect(),
        EventKind::Insert => {
            let mut files = snapshot.files.clone();
            files.push(file.clone());
            files
        }
    };

    Snapshot {
        user: snapshot.user.clone(),
        files,
        file_states: snapshot.file_states.clone(),
    }
}

fn apply_file_state(snapshot: &Snapshot, event: EventKind, state: &FileState) -> Snapshot {
    let file_states = match event {
        EventKind::Delete => snapshot
            .file_states
            .iter()
            .filter(|s| !s.matches(&state.file_id, &state.user_id))
            .cloned()
            .collect(),
        EventKind::Update => snapshot
            .file_states
            .iter()
            .map(|s| {
                if s.matches(&state.file_id, &state.user_id) {
                    state.clone()
                } else {
                    s.clone()
                }
            })
            .collect(),
        EventKind::Insert => {
            let mut file_states = snapshot.file_states.clone();
            file_states.push(state.clone());
            file_states
        }
    };

    Snapshot {
        user: snapshot.user.clone(),
        files: snapshot.files.clone(),
        file_states,
    }
}

fn expect_user(update: &RowUpdate) -> Result<&User> {
    match &update.row {
        RowPayload::User(user) => Ok(user),
        other => Err(mismatch(update.table, other)),
    }
}

fn expect_file(update: &RowUpdate) -> Result<&File> {
    match &update.row {
        RowPayload::File(file) => Ok(file),
        other => Err(mismatch(update.table, other)),
    }
}

fn expect_file_state(update: &RowUpdate) -> Result<&FileState> {
    match &update.row {
        RowPayload::FileState(state) => Ok(state),
        other => Err(mismatch(update.table, other)),
    }
}

fn mismatch(table: TableKind, payload: &RowPayload) -> VeneerError {
    VeneerError::PayloadMismatch {
        table,
        payload: payload.table(),
    }
}
