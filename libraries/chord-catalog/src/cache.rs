//! In-process Cache Gateway implementation and cache key builders

use async_trait::async_trait;
use chord_core::{AlbumId, CacheError, CacheStore};
use lru::LruCache;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Cache key for a composed album
pub fn album_key(id: &AlbumId) -> String {
    format!("album:{id}")
}

/// Cache key for an album's like count
pub fn album_likes_key(id: &AlbumId) -> String {
    format!("album-likes:{id}")
}

struct Entry {
    value: Vec<u8>,
    expires_at: Option<Instant>,
}

impl Entry {
    fn expired(&self) -> bool {
        self.expires_at.is_some_and(|at| Instant::now() >= at)
    }
}

/// Capacity-bounded in-memory `CacheStore`
///
/// LRU eviction with optional per-entry TTL checked at read time. There is
/// no background sweeper; an expired entry is dropped on the read that
/// finds it.
pub struct MemoryCache {
    entries: Mutex<LruCache<String, Entry>>,
}

impl MemoryCache {
    /// Create a cache holding at most `capacity` entries
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        // 1024 entries covers a working set of hot albums comfortably
        Self::new(NonZeroUsize::new(1024).unwrap_or(NonZeroUsize::MIN))
    }
}

#[async_trait]
impl CacheStore for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let mut entries = self.entries.lock().await;

        if entries.peek(key).is_some_and(Entry::expired) {
            entries.pop(key);
            return Ok(None);
        }

        Ok(entries.get(key).map(|entry| entry.value.clone()))
    }

    async fn set(
        &self,
        key: &str,
        value: Vec<u8>,
        ttl: Option<Duration>,
    ) -> Result<(), CacheError> {
        let entry = Entry {
            value,
            expires_at: ttl.map(|ttl| Instant::now() + ttl),
        };

        self.entries.lock().await.put(key.to_string(), entry);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        // Deleting an absent key is not an error
        self.entries.lock().await.pop(key);
        Ok(())
    }
}
