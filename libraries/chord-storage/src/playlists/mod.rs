use chord_core::{error::Result, types::*};
use sqlx::{Row, SqlitePool};

pub async fn create(pool: &SqlitePool, name: &str, owner: &UserId) -> Result<PlaylistId> {
    let id = PlaylistId::generate();

    sqlx::query("INSERT INTO playlists (id, name, owner) VALUES (?, ?, ?)")
        .bind(&id)
        .bind(name)
        .bind(owner)
        .execute(pool)
        .await?;

    Ok(id)
}

pub async fn get_by_id(pool: &SqlitePool, id: &PlaylistId) -> Result<Option<Playlist>> {
    let row = sqlx::query("SELECT id, name, owner FROM playlists WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|row| Playlist {
        id: row.get("id"),
        name: row.get("name"),
        owner: row.get("owner"),
    }))
}

/// Owner of a playlist, `None` if the playlist does not exist
pub async fn owner_of(pool: &SqlitePool, id: &PlaylistId) -> Result<Option<UserId>> {
    let row = sqlx::query("SELECT owner FROM playlists WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|row| row.get("owner")))
}

/// Playlists a user can act on: owned plus collaborated
pub async fn get_for_user(pool: &SqlitePool, user: &UserId) -> Result<Vec<PlaylistSummary>> {
    let rows = sqlx::query(
        "SELECT p.id, p.name, u.username
         FROM playlists AS p
         INNER JOIN users AS u ON p.owner = u.id
         WHERE p.owner = ?
         UNION
         SELECT p.id, p.name, u.username
         FROM collaborations AS c
         INNER JOIN playlists AS p ON c.playlist_id = p.id
         INNER JOIN users AS u ON p.owner = u.id
         WHERE c.user_id = ?",
    )
    .bind(user)
    .bind(user)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| PlaylistSummary {
            id: row.get("id"),
            name: row.get("name"),
            username: row.get("username"),
        })
        .collect())
}

/// Delete a playlist; song associations and grants cascade, the activity
/// log is retained (append-only)
pub async fn delete(pool: &SqlitePool, id: &PlaylistId) -> Result<u64> {
    let result = sqlx::query("DELETE FROM playlists WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// Insert a playlist/song association
///
/// Each call inserts a fresh row; duplicates are not collapsed here.
pub async fn add_song(
    pool: &SqlitePool,
    playlist: &PlaylistId,
    song: &SongId,
) -> Result<PlaylistSongId> {
    let id = PlaylistSongId::generate();

    sqlx::query("INSERT INTO playlist_songs (id, playlist_id, song_id) VALUES (?, ?, ?)")
        .bind(&id)
        .bind(playlist)
        .bind(song)
        .execute(pool)
        .await?;

    Ok(id)
}

/// Remove a playlist/song association; returns the number of rows affected
pub async fn remove_song(pool: &SqlitePool, playlist: &PlaylistId, song: &SongId) -> Result<u64> {
    let result = sqlx::query("DELETE FROM playlist_songs WHERE playlist_id = ? AND song_id = ?")
        .bind(playlist)
        .bind(song)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// Songs attached to a playlist
pub async fn songs_of(pool: &SqlitePool, playlist: &PlaylistId) -> Result<Vec<Song>> {
    let rows = sqlx::query(
        "SELECT s.id, s.title, s.performer, s.album_id
         FROM songs AS s
         INNER JOIN playlist_songs AS ps ON ps.song_id = s.id
         WHERE ps.playlist_id = ?
         ORDER BY s.title",
    )
    .bind(playlist)
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
