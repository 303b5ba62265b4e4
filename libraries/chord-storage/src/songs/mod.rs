use chord_core::{error::Result, types::*};
use sqlx::{Row, SqlitePool};

pub async fn create(pool: &SqlitePool, song: CreateSong) -> Result<SongId> {
    let id = SongId::generate();

    sqlx::query("INSERT INTO songs (id, title, performer, album_id) VALUES (?, ?, ?, ?)")
        .bind(&id)
        .bind(&song.title)
        .bind(&song.performer)
        .bind(song.album_id.as_ref())
        .execute(pool)
        .await?;

    Ok(id)
}

pub async fn get_by_id(pool: &SqlitePool, id: &SongId) -> Result<Option<Song>> {
    let row = sqlx::query("SELECT id, title, performer, album_id FROM songs WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|row| Song {
        id: row.get("id"),
        title: row.get("title"),
        performer: row.get("performer"),
        album_id: row.get("album_id"),
    }))
}

pub async fn get_by_album(pool: &SqlitePool, album_id: &AlbumId) -> Result<Vec<Song>> {
    let rows = sqlx::query(
        "SELECT id, title, performer, album_id FROM songs WHERE album_id = ? ORDER BY title",
    )
    .bind(album_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| Song {
            id: row.get("id"),
            title: row.get("title"),
            performer: row.get("performer"),
            album_id: row.get("album_id"),
        })
        .collect())
}
