//! Test helpers, fixtures, and collaborator doubles for catalog tests

use async_trait::async_trait;
use chord_core::types::*;
use chord_core::{CacheError, CacheStore, ChordError, CollaborationVerifier};
use sqlx::SqlitePool;
use std::time::Duration;
use tempfile::TempDir;

/// Test database wrapper that cleans up on drop
pub struct TestDb {
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

impl TestDb {
    /// Create a new test database with migrations applied
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let db_url = format!("sqlite://{}", db_path.display());

        let pool = chord_storage::create_pool(&db_url)
            .await
            .expect("Failed to create pool");

        chord_storage::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        Self {
            pool,
            _temp_dir: temp_dir,
        }
    }

    /// Get the pool reference
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Cache double whose every call fails, proving fault absorption
pub struct FailingCache;

#[async_trait]
impl CacheStore for FailingCache {
    async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        Err(CacheError::Backend("cache is down".to_string()))
    }

    async fn set(
        &self,
        _key: &str,
        _value: Vec<u8>,
        _ttl: Option<Duration>,
    ) -> Result<(), CacheError> {
        Err(CacheError::Backend("cache is down".to_string()))
    }

    async fn delete(&self, _key: &str) -> Result<(), CacheError> {
        Err(CacheError::Backend("cache is down".to_string()))
    }
}

/// Verifier double that grants everyone
pub struct AllowAllVerifier;

#[async_trait]
impl CollaborationVerifier for AllowAllVerifier {
    async fn verify_collaborator(&self, _playlist: &PlaylistId, _user: &UserId) -> chord_core::Result<()> {
        Ok(())
    }
}

/// Verifier double that fails with a backing-store fault
pub struct FaultyVerifier;

#[async_trait]
impl CollaborationVerifier for FaultyVerifier {
    async fn verify_collaborator(&self, _playlist: &PlaylistId, _user: &UserId) -> chord_core::Result<()> {
        Err(ChordError::Database("collaboration store unreachable".to_string()))
    }
}

/// Test fixture: Create a test user
pub async fn create_test_user(pool: &SqlitePool, username: &str) -> UserId {
    chord_storage::users::create(pool, username)
        .await
        .expect("Failed to create test user")
        .id
}

/// Test fixture: Create a test album
pub async fn create_test_album(pool: &SqlitePool, name: &str, year: i32) -> AlbumId {
    chord_storage::albums::create(
        pool,
        CreateAlbum {
            name: name.to_string(),
            year,
        },
    )
    .await
    .expect("Failed to create test album")
}

/// Test fixture: Create a test song
pub async fn create_test_song(pool: &SqlitePool, title: &str, performer: &str) -> SongId {
    chord_storage::songs::create(
        pool,
        CreateSong {
            title: title.to_string(),
            performer: performer.to_string(),
            album_id: None,
        },
    )
    .await
    .expect("Failed to create test song")
}

/// Test fixture: Create a test playlist
pub async fn create_test_playlist(pool: &SqlitePool, name: &str, owner: &UserId) -> PlaylistId {
    chord_storage::playlists::create(pool, name, owner)
        .await
        .expect("Failed to create test playlist")
}
