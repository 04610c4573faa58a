//! Row-update wire types
//!
//! A `RowUpdate` is the unit of change flowing through the store: the sync
//! transport delivers them for confirmed server changes, and the local
//! mutation layer groups them into speculative batches. The `table` field
//! names the container the update targets; `row` carries the full new row
//! value (also for deletes, which only need the key fields).

use serde::{Deserialize, Serialize};

use crate::model::{File, FileState, User};

/// The three row containers a snapshot aggregates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    User,
    File,
    FileState,
}

impl std::fmt::Display for TableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableKind::User => write!(f, "user"),
            TableKind::File => write!(f, "file"),
            TableKind::FileState => write!(f, "file_state"),
        }
    }
}

/// The kind of change a RowUpdate describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Insert,
    Update,
    Delete,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventKind::Insert => write!(f, "insert"),
            EventKind::Update => write!(f, "update"),
            EventKind::Delete => write!(f, "delete"),
        }
    }
}

/// Full row value carried by a RowUpdate, one variant per table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowPayload {
    User(User),
    File(File),
    FileState(FileState),
}

impl RowPayload {
    /// The table this payload belongs to
    pub fn table(&self) -> TableKind {
        match self {
            RowPayload::User(_) => TableKind::User,
            RowPayload::File(_) => TableKind::File,
            RowPayload::FileState(_) => TableKind::FileState,
        }
    }
}

/// One row-level change against a snapshot
///
/// Contract: `row` must carry the payload variant matching `table`. A
/// disagreement is a caller contract violation surfaced as
/// [`VeneerError::PayloadMismatch`](crate::errors::VeneerError) by the
/// application algorithm, never silently ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowUpdate {
    /// Target container
    pub table: TableKind,
    /// Kind of change
    pub event: EventKind,
    /// Full new row value (key fields suffice for Delete, but the full
    /// row is always supplied)
    pub row: RowPayload,
}

impl RowUpdate {
    /// Build an update whose `table` field is derived from the payload
    ///
    /// This is the only constructor that cannot produce a payload
    /// mismatch; updates deserialized from the wire are checked at
    /// application time instead.
    pub fn new(event: EventKind, row: RowPayload) -> Self {
        Self {
            table: row.table(),
            event,
            row,
        }
    }
}
