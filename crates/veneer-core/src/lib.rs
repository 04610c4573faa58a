//! Veneer Core - Client-side layered optimistic store
//!
//! This crate provides the reconciliation core of an optimistic-update
//! data store:
//! - A committed layer holding the last server-confirmed snapshot
//! - A pending layer of speculative mutation batches awaiting ack
//! - A memoized derivation replaying pending batches over committed
//!   state to produce the effective, user-visible snapshot
//! - A pure row-update application algorithm shared by both paths
//!
//! Transport, change notification, and persistence are external
//! collaborators; this crate is the synchronous in-process library they
//! drive.

pub mod apply;
pub mod committed;
pub mod effective;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod pending;
pub mod snapshot;
pub mod store;
pub mod update;

// Re-export commonly used types
pub use apply::apply;
pub use errors::{Result, VeneerError};
pub use model::{File, FileState, User};
pub use pending::MutationBatch;
pub use snapshot::Snapshot;
pub use store::LayeredStore;
pub use update::{EventKind, RowPayload, RowUpdate, TableKind};
pub use veneer_core_types::MutationId;
