use chord_core::{error::Result, types::*};
use sqlx::{Row, SqlitePool};

/// True if `user` already likes `album`
pub async fn exists(pool: &SqlitePool, user: &UserId, album: &AlbumId) -> Result<bool> {
    let row = sqlx::query("SELECT id FROM user_album_likes WHERE user_id = ? AND album_id = ?")
        .bind(user)
        .bind(album)
        .fetch_optional(pool)
        .await?;

    Ok(row.is_some())
}

pub async fn insert(pool: &SqlitePool, user: &UserId, album: &AlbumId) -> Result<LikeId> {
    let id = LikeId::generate();

    sqlx::query("INSERT INTO user_album_likes (id, user_id, album_id) VALUES (?, ?, ?)")
        .bind(&id)
        .bind(user)
        .bind(album)
        .execute(pool)
        .await?;

    Ok(id)
}

/// Delete a like; returns the number of rows affected
pub async fn delete(pool: &SqlitePool, user: &UserId, album: &AlbumId) -> Result<u64> {
    let result = sqlx::query("DELETE FROM user_album_likes WHERE user_id = ? AND album_id = ?")
        .bind(user)
        .bind(album)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

pub async fn count(pool: &SqlitePool, album: &AlbumId) -> Result<i64> {
    let row = sqlx::query("SELECT COUNT(id) AS likes FROM user_album_likes WHERE album_id = ?")
        .bind(album)
        .fetch_one(pool)
        .await?;

    Ok(row.get("likes"))
}
