use crate::datetime_from_secs;
use chord_core::{error::Result, types::*};
use chrono::Utc;
use sqlx::{Row, SqlitePool};

pub async fn create(pool: &SqlitePool, album: CreateAlbum) -> Result<AlbumId> {
    let id = AlbumId::generate();
    let now = Utc::now().timestamp();

    sqlx::query(
        "INSERT INTO albums (id, name, year, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&id)
    .bind(&album.name)
    .bind(album.year)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(id)
}

pub async fn get_by_id(pool: &SqlitePool, id: &AlbumId) -> Result<Option<Album>> {
    let row = sqlx::query(
        "SELECT id, name, year, cover_url, created_at, updated_at
         FROM albums WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.map(|row| {
        Ok(Album {
            id: row.get("id"),
            name: row.get("name"),
            year: row.get("year"),
            cover_url: row.get("cover_url"),
            created_at: datetime_from_secs(row.get("created_at"))?,
            updated_at: datetime_from_secs(row.get("updated_at"))?,
        })
    })
    .transpose()
}

/// Update name and year; returns the number of rows affected
pub async fn update(pool: &SqlitePool, id: &AlbumId, album: &UpdateAlbum) -> Result<u64> {
    let result = sqlx::query("UPDATE albums SET name = ?, year = ?, updated_at = ? WHERE id = ?")
        .bind(&album.name)
        .bind(album.year)
        .bind(Utc::now().timestamp())
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// Attach a cover image URL; returns the number of rows affected
pub async fn set_cover(pool: &SqlitePool, id: &AlbumId, cover_url: &str) -> Result<u64> {
    let result = sqlx::query("UPDATE albums SET cover_url = ?, updated_at = ? WHERE id = ?")
        .bind(cover_url)
        .bind(Utc::now().timestamp())
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// Delete an album; likes and song back-references cascade
pub async fn delete(pool: &SqlitePool, id: &AlbumId) -> Result<u64> {
    let result = sqlx::query("DELETE FROM albums WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
