//! Chord Storage
//!
//! `SQLite` store gateway for the Chord catalog and collaboration services.
//!
//! Each relation owns its own vertical slice of queries: free async
//! functions over a shared `SqlitePool`. No slice performs authorization or
//! caching; those concerns live in `chord-catalog`.
//!
//! # Example
//!
//! ```rust,no_run
//! use chord_storage::{create_pool, run_migrations};
//!
//! # async fn example() -> chord_core::Result<()> {
//! let pool = create_pool("sqlite://chord.db").await?;
//! run_migrations(&pool).await?;
//!
//! let _album = chord_storage::albums::get_by_id(&pool, &chord_core::AlbumId::new("album-1")).await?;
//! # Ok(())
//! # }
//! ```

// Vertical slices
pub mod activities;
pub mod albums;
pub mod collaborations;
pub mod likes;
pub mod playlists;
pub mod songs;
pub mod users;

use chord_core::{ChordError, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `sqlite://chord.db`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| ChordError::Database(e.to_string()))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true) // delete cascades rely on this
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Run database migrations
///
/// Migrations are embedded so they apply in any execution context. This
/// should be called once when the application starts.
///
/// # Errors
///
/// Returns an error if a migration fails to apply
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    const MIGRATIONS: &[&str] = &[
        include_str!("../migrations/20251104000001_create_users.sql"),
        include_str!("../migrations/20251104000002_create_albums.sql"),
        include_str!("../migrations/20251104000003_create_songs.sql"),
        include_str!("../migrations/20251104000004_create_playlists.sql"),
        include_str!("../migrations/20251104000005_create_playlist_songs.sql"),
        include_str!("../migrations/20251104000006_create_playlist_activities.sql"),
        include_str!("../migrations/20251104000007_create_user_album_likes.sql"),
        include_str!("../migrations/20251104000008_create_collaborations.sql"),
    ];

    for migration in MIGRATIONS {
        // Each file may hold several statements (table + indexes)
        for statement in migration.split(';').filter(|s| {
            s.lines()
                .any(|line| !line.trim().is_empty() && !line.trim().starts_with("--"))
        }) {
            sqlx::query(statement)
                .execute(pool)
                .await
                .map_err(|e| ChordError::Migration(e.to_string()))?;
        }
    }

    Ok(())
}

/// Decode an epoch-seconds column into a `DateTime<Utc>`
pub(crate) fn datetime_from_secs(secs: i64) -> Result<chrono::DateTime<chrono::Utc>> {
    chrono::DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| ChordError::Database(format!("Invalid timestamp: {secs}")))
}

/// Decode an epoch-milliseconds column into a `DateTime<Utc>`
pub(crate) fn datetime_from_millis(millis: i64) -> Result<chrono::DateTime<chrono::Utc>> {
    chrono::DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| ChordError::Database(format!("Invalid timestamp: {millis}")))
}
