/// Activity log domain types
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a playlist mutation did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityAction {
    /// A song was added to the playlist
    Add,
    /// A song was removed from the playlist
    Delete,
}

impl ActivityAction {
    /// Convert action to string for database storage
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityAction::Add => "add",
            ActivityAction::Delete => "delete",
        }
    }

    /// Parse action from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "add" => Some(ActivityAction::Add),
            "delete" => Some(ActivityAction::Delete),
            _ => None,
        }
    }
}

/// One entry of a playlist's activity log, joined to its display fields
///
/// Entries are immutable and append-only; retrieval order is timestamp
/// ascending with insertion order breaking ties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// Username of the user who performed the action
    pub username: String,

    /// Title of the song the action applied to
    pub title: String,

    /// What happened
    pub action: ActivityAction,

    /// Server-assigned wall-clock timestamp captured at record time
    pub time: DateTime<Utc>,
}
