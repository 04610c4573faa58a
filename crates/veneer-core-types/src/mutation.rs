//! Mutation identity
//!
//! A MutationId names one logical client-initiated change for its whole
//! lifetime: issued with the speculative batch, quoted back by the server
//! in the acknowledgement or rejection that retires it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier for a single speculative mutation batch
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MutationId(String);

impl MutationId {
    /// Generate a new random MutationId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (for ids minted elsewhere)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for MutationId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for MutationId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for MutationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
