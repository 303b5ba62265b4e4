use crate::datetime_from_millis;
use chord_core::{error::Result, types::*};
use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};

/// Append one activity row; returns the number of rows affected
pub async fn append(
    pool: &SqlitePool,
    playlist: &PlaylistId,
    song: &SongId,
    user: &UserId,
    action: ActivityAction,
    time: DateTime<Utc>,
) -> Result<u64> {
    let id = ActivityId::generate();

    let result = sqlx::query(
        "INSERT INTO playlist_activities (id, playlist_id, song_id, user_id, action, time)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&id)
    .bind(playlist)
    .bind(song)
    .bind(user)
    .bind(action.as_str())
    .bind(time.timestamp_millis())
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// All activity for a playlist, oldest first
///
/// Equal timestamps keep insertion order (rowid tie-break), so repeated
/// reads of an unchanged log never reorder.
pub async fn list(pool: &SqlitePool, playlist: &PlaylistId) -> Result<Vec<ActivityEntry>> {
    let rows = sqlx::query(
        "SELECT u.username, s.title, a.action, a.time
         FROM playlist_activities AS a
         INNER JOIN songs AS s ON a.song_id = s.id
         INNER JOIN users AS u ON a.user_id = u.id
         WHERE a.playlist_id = ?
         ORDER BY a.time ASC, a.rowid ASC",
    )
    .bind(playlist)
    .fetch_all(pool)
    .await?;

    rows.into_iter()
        .map(|row| {
            let action: String = row.get("action");
            Ok(ActivityEntry {
                username: row.get("username"),
                title: row.get("title"),
                action: ActivityAction::from_str(&action).ok_or_else(|| {
                    chord_core::ChordError::Database(format!("Invalid action: {action}"))
                })?,
                time: datetime_from_millis(row.get("time"))?,
            })
        })
        .collect()
}
