//! Core types shared across Veneer facilities
//!
//! This crate provides foundational types used by both the store core
//! and the logging facility:
//!
//! - **Mutation identity**: MutationId, the opaque handle pairing a
//!   speculative batch with its eventual commit or rejection
//! - **Schema constants**: Canonical field keys and event names

pub mod mutation;
pub mod schema;

pub use mutation::MutationId;
