//! Trait seams consumed by the service layer
//!
//! The store is the source of truth; the cache and the collaboration check
//! are collaborators behind these traits so services can be wired against
//! real backends in production and doubles in tests.

use crate::error::Result;
use crate::types::{PlaylistId, UserId};
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Cache backend fault
///
/// Never reaches service callers: the catalog absorbs every cache fault and
/// falls through to the store.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Backend unreachable or misbehaving
    #[error("Cache backend error: {0}")]
    Backend(String),
}

/// Key/value Cache Gateway
///
/// `get` distinguishes a miss (`Ok(None)`) from a fault (`Err`); callers
/// treat both as a miss but log the latter. `delete` of an absent key is
/// not an error.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Look up a key, `Ok(None)` on miss
    async fn get(&self, key: &str) -> std::result::Result<Option<Vec<u8>>, CacheError>;

    /// Store a value, optionally with a time-to-live
    async fn set(
        &self,
        key: &str,
        value: Vec<u8>,
        ttl: Option<Duration>,
    ) -> std::result::Result<(), CacheError>;

    /// Remove a key; idempotent
    async fn delete(&self, key: &str) -> std::result::Result<(), CacheError>;
}

/// Collaboration collaborator surface
///
/// Succeeds iff `user` holds a collaboration grant on `playlist`. The
/// authorization resolver consults this only after the ownership check has
/// denied, and swallows its failures in favor of the owner-denial reason.
#[async_trait]
pub trait CollaborationVerifier: Send + Sync {
    /// Verify that `user` is a collaborator on `playlist`
    async fn verify_collaborator(&self, playlist: &PlaylistId, user: &UserId) -> Result<()>;
}
