//! Activity Recorder: append-only log of playlist mutations
//!
//! Never authorizes; callers resolve access before recording.

use chord_core::{ActivityAction, ActivityEntry, ChordError, PlaylistId, Result, SongId, UserId};
use chrono::Utc;
use sqlx::SqlitePool;

pub struct ActivityLog {
    pool: SqlitePool,
}

impl ActivityLog {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Append one immutable entry with a server-assigned timestamp
    ///
    /// Zero rows appended signals a store fault, surfaced as
    /// `InvariantViolation`.
    pub async fn record(
        &self,
        playlist: &PlaylistId,
        song: &SongId,
        user: &UserId,
        action: ActivityAction,
    ) -> Result<()> {
        let rows =
            chord_storage::activities::append(&self.pool, playlist, song, user, action, Utc::now())
                .await?;

        if rows == 0 {
            return Err(ChordError::invariant("failed to record activity"));
        }
        Ok(())
    }

    /// All activity for a playlist, timestamp ascending
    pub async fn activities(&self, playlist: &PlaylistId) -> Result<Vec<ActivityEntry>> {
        chord_storage::activities::list(&self.pool, playlist).await
    }
}
