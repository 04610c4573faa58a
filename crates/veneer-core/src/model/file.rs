use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// File - one shared document visible to this client
///
/// Files are keyed by unique `id` within a snapshot. Key uniqueness is a
/// caller contract enforced by the server schema, not revalidated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct File {
    /// Unique identifier for this file
    pub id: String,

    /// Human-readable file name
    pub name: String,

    /// ID of the owning user
    pub owner_id: String,

    /// Whether the file is shared beyond its owner
    pub shared: bool,

    /// Timestamp when this file was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when this row was last updated
    pub updated_at: DateTime<Utc>,
}

impl File {
    /// Create a new private File with the given ID, name, and owner
    pub fn new(id: String, name: String, owner_id: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            owner_id,
            shared: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether this file is owned by the given user
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.owner_id == user_id
    }
}
