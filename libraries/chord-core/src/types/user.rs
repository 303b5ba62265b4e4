/// User domain type
use super::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Display name
    pub username: String,

    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}
