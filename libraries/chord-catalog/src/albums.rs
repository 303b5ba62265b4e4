//! Catalog Cache Layer: cache-aside album reads with write-triggered
//! invalidation
//!
//! The store is the source of truth. Every cache fault — unreachable
//! backend, corrupt payload — is absorbed and treated as a miss, so reads
//! stay correct with the cache fully disabled. Every mutating operation
//! invalidates its key(s) after the store write commits and before
//! returning, so no caller observes a pre-write cache hit once a mutating
//! call has returned.

use crate::cache::{album_key, album_likes_key};
use chord_core::{
    AlbumId, AlbumWithSongs, CacheStore, ChordError, CreateAlbum, LikeCount, Result, UpdateAlbum,
    UserId,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// How long populated entries may live in the cache backend
const CACHE_TTL: Duration = Duration::from_secs(30 * 60);

/// Album catalog service with cache-aside reads
pub struct AlbumCatalog {
    pool: SqlitePool,
    cache: Arc<dyn CacheStore>,
}

impl AlbumCatalog {
    pub fn new(pool: SqlitePool, cache: Arc<dyn CacheStore>) -> Self {
        Self { pool, cache }
    }

    pub async fn create_album(&self, album: CreateAlbum) -> Result<AlbumId> {
        chord_storage::albums::create(&self.pool, album).await
    }

    /// Get an album composed with its songs
    ///
    /// Cache hit: deserialize and return without touching the store.
    /// Miss (or any cache fault): one logical store fetch, populate, return.
    /// `NotFound` is never cached.
    pub async fn get_album(&self, id: &AlbumId) -> Result<AlbumWithSongs> {
        let key = album_key(id);

        if let Some(bytes) = self.cache_get(&key).await {
            match serde_json::from_slice::<AlbumWithSongs>(&bytes) {
                Ok(album) => {
                    debug!(album = %id, "album served from cache");
                    return Ok(album);
                }
                Err(err) => {
                    warn!(album = %id, error = %err, "corrupt cache entry, refetching");
                }
            }
        }

        let album = chord_storage::albums::get_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| ChordError::not_found("Album", id.as_str()))?;
        let songs = chord_storage::songs::get_by_album(&self.pool, id).await?;

        let composed = AlbumWithSongs {
            id: album.id,
            name: album.name,
            year: album.year,
            cover_url: album.cover_url,
            songs,
        };

        if let Ok(bytes) = serde_json::to_vec(&composed) {
            self.cache_set(&key, bytes).await;
        }

        Ok(composed)
    }

    /// Number of distinct users liking an album, with cache provenance
    pub async fn get_like_count(&self, id: &AlbumId) -> Result<LikeCount> {
        let key = album_likes_key(id);

        if let Some(bytes) = self.cache_get(&key).await {
            match serde_json::from_slice::<i64>(&bytes) {
                Ok(count) => {
                    return Ok(LikeCount {
                        count,
                        from_cache: true,
                    });
                }
                Err(err) => {
                    warn!(album = %id, error = %err, "corrupt cache entry, refetching");
                }
            }
        }

        self.require_album(id).await?;
        let count = chord_storage::likes::count(&self.pool, id).await?;

        if let Ok(bytes) = serde_json::to_vec(&count) {
            self.cache_set(&key, bytes).await;
        }

        Ok(LikeCount {
            count,
            from_cache: false,
        })
    }

    pub async fn update_album(&self, id: &AlbumId, album: &UpdateAlbum) -> Result<()> {
        let rows = chord_storage::albums::update(&self.pool, id, album).await?;
        if rows == 0 {
            return Err(ChordError::not_found("Album", id.as_str()));
        }

        self.invalidate(&album_key(id)).await;
        Ok(())
    }

    pub async fn delete_album(&self, id: &AlbumId) -> Result<()> {
        let rows = chord_storage::albums::delete(&self.pool, id).await?;
        if rows == 0 {
            return Err(ChordError::not_found("Album", id.as_str()));
        }

        // Likes cascade with the album row, so both projections are stale
        self.invalidate(&album_key(id)).await;
        self.invalidate(&album_likes_key(id)).await;
        Ok(())
    }

    pub async fn set_cover(&self, id: &AlbumId, cover_url: &str) -> Result<()> {
        let rows = chord_storage::albums::set_cover(&self.pool, id, cover_url).await?;
        if rows == 0 {
            return Err(ChordError::not_found("Album", id.as_str()));
        }

        self.invalidate(&album_key(id)).await;
        Ok(())
    }

    /// Like an album; at most one like per (user, album)
    pub async fn like(&self, id: &AlbumId, user: &UserId) -> Result<()> {
        self.require_album(id).await?;

        if chord_storage::likes::exists(&self.pool, user, id).await? {
            return Err(ChordError::invariant("album already liked"));
        }
        chord_storage::likes::insert(&self.pool, user, id).await?;

        self.invalidate(&album_likes_key(id)).await;
        Ok(())
    }

    pub async fn unlike(&self, id: &AlbumId, user: &UserId) -> Result<()> {
        let rows = chord_storage::likes::delete(&self.pool, user, id).await?;
        if rows == 0 {
            return Err(ChordError::invariant("album was not liked"));
        }

        self.invalidate(&album_likes_key(id)).await;
        Ok(())
    }

    async fn require_album(&self, id: &AlbumId) -> Result<()> {
        chord_storage::albums::get_by_id(&self.pool, id)
            .await?
            .map(|_| ())
            .ok_or_else(|| ChordError::not_found("Album", id.as_str()))
    }

    async fn cache_get(&self, key: &str) -> Option<Vec<u8>> {
        match self.cache.get(key).await {
            Ok(hit) => hit,
            Err(err) => {
                warn!(key, error = %err, "cache read failed, falling back to store");
                None
            }
        }
    }

    async fn cache_set(&self, key: &str, value: Vec<u8>) {
        if let Err(err) = self.cache.set(key, value, Some(CACHE_TTL)).await {
            warn!(key, error = %err, "cache write failed");
        }
    }

    async fn invalidate(&self, key: &str) {
        if let Err(err) = self.cache.delete(key).await {
            warn!(key, error = %err, "cache invalidation failed");
        }
    }
}
