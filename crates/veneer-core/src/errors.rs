use thiserror::Error;

use crate::update::TableKind;

/// Result type alias using VeneerError
pub type Result<T> = std::result::Result<T, VeneerError>;

/// Canonical error type for the store core
///
/// The store distinguishes exactly one class of fatal condition: a caller
/// contract violation in the shape of a row update. Everything else the
/// layers can encounter (missing key on Update/Delete, duplicate key on
/// Insert, unknown mutation id on commit/reject, read before initialize)
/// is an ordinary race between layers and is defined as a silent no-op or
/// absent-value return, never an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VeneerError {
    /// Row payload variant does not match the update's declared table
    ///
    /// Indicates a bug in the caller or a schema mismatch with the
    /// transport. There is no retry policy: the offending operation is
    /// aborted and the store's state is left untouched.
    #[error("Row payload is {payload} but update targets table {table}")]
    PayloadMismatch {
        table: TableKind,
        payload: TableKind,
    },
}

impl VeneerError {
    /// Get the stable error code for this error
    ///
    /// Codes are stable identifiers for programmatic handling, testing,
    /// and structured log fields.
    pub fn code(&self) -> &'static str {
        match self {
            VeneerError::PayloadMismatch { .. } => "ERR_PAYLOAD_MISMATCH",
        }
    }
}
