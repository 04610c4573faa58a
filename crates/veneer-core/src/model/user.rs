use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User - the authenticated account owning this client session
///
/// A snapshot holds at most one User record (singleton slot). The server
/// is free to resend the row unchanged; the committed layer absorbs that
/// via deep equality rather than treating it as a change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for this user
    pub id: String,

    /// Display name
    pub name: String,

    /// Account email address
    pub email: String,

    /// Preferred presence/cursor color
    pub color: String,

    /// Timestamp when this account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when this row was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with the given ID and name
    ///
    /// Email and color start empty; current timestamps are applied.
    pub fn new(id: String, name: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            email: String::new(),
            color: String::new(),
            created_at: now,
            updated_at: now,
        }
    }
}
