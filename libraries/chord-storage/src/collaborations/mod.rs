use chord_core::{error::Result, types::*};
use sqlx::{Row, SqlitePool};

pub async fn insert(
    pool: &SqlitePool,
    playlist: &PlaylistId,
    user: &UserId,
) -> Result<CollaborationId> {
    let id = CollaborationId::generate();

    sqlx::query("INSERT INTO collaborations (id, playlist_id, user_id) VALUES (?, ?, ?)")
        .bind(&id)
        .bind(playlist)
        .bind(user)
        .execute(pool)
        .await?;

    Ok(id)
}

/// Revoke a grant; returns the number of rows affected
pub async fn delete(pool: &SqlitePool, playlist: &PlaylistId, user: &UserId) -> Result<u64> {
    let result = sqlx::query("DELETE FROM collaborations WHERE playlist_id = ? AND user_id = ?")
        .bind(playlist)
        .bind(user)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// True if `user` holds a collaboration grant on `playlist`
pub async fn exists(pool: &SqlitePool, playlist: &PlaylistId, user: &UserId) -> Result<bool> {
    let row = sqlx::query("SELECT id FROM collaborations WHERE playlist_id = ? AND user_id = ?")
        .bind(playlist)
        .bind(user)
        .fetch_optional(pool)
        .await?;

    Ok(row.is_some())
}
