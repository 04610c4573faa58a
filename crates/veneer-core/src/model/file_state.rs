use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// FileState - one user's relationship to one file
///
/// Keyed by the composite `(file_id, user_id)`. Tracks per-user, per-file
/// presence details such as visit/edit times and pinning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileState {
    /// ID of the file this state refers to
    pub file_id: String,

    /// ID of the user this state belongs to
    pub user_id: String,

    /// When this user first opened the file (None if never opened)
    pub first_visit_at: Option<DateTime<Utc>>,

    /// When this user last edited the file (None if never edited)
    pub last_edit_at: Option<DateTime<Utc>>,

    /// Whether this user pinned the file
    pub is_pinned: bool,
}

impl FileState {
    /// Create a new FileState for the given file/user pair
    pub fn new(file_id: String, user_id: String) -> Self {
        Self {
            file_id,
            user_id,
            first_visit_at: None,
            last_edit_at: None,
            is_pinned: false,
        }
    }

    /// Check whether this state matches the given composite key
    pub fn matches(&self, file_id: &str, user_id: &str) -> bool {
        self.file_id == file_id && self.user_id == user_id
    }

    /// Get the composite key as a pair of borrowed strings
    pub fn key(&self) -> (&str, &str) {
        (&self.file_id, &self.user_id)
    }
}
