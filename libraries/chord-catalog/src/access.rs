//! Authorization Resolver: owner-or-collaborator access to playlists
//!
//! `NotFound` is reserved for "the playlist itself does not exist" and takes
//! precedence over everything, including stale collaboration rows. A denial
//! always reports the ownership-check reason, no matter how the secondary
//! collaboration check failed.

use async_trait::async_trait;
use chord_core::{ChordError, CollaborationId, CollaborationVerifier, PlaylistId, Result, UserId};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::warn;

const ACCESS_DENIED: &str = "you are not entitled to access this resource";

/// State-free access decision over playlist ownership and collaboration data
pub struct PlaylistAccess {
    pool: SqlitePool,
    verifier: Arc<dyn CollaborationVerifier>,
}

impl PlaylistAccess {
    pub fn new(pool: SqlitePool, verifier: Arc<dyn CollaborationVerifier>) -> Self {
        Self { pool, verifier }
    }

    /// Allow iff `user` owns `playlist`
    ///
    /// Missing playlist is `NotFound`; an existing playlist with a different
    /// owner is `Forbidden`.
    pub async fn verify_owner(&self, playlist: &PlaylistId, user: &UserId) -> Result<()> {
        let owner = chord_storage::playlists::owner_of(&self.pool, playlist)
            .await?
            .ok_or_else(|| ChordError::not_found("Playlist", playlist.as_str()))?;

        if owner != *user {
            return Err(ChordError::forbidden(ACCESS_DENIED));
        }
        Ok(())
    }

    /// Allow iff `user` owns `playlist` or holds a collaboration grant on it
    ///
    /// The collaboration check only runs after ownership has denied, and its
    /// own failures are swallowed in favor of the original denial so callers
    /// always see the uniform owner-centric reason.
    pub async fn verify_access(&self, playlist: &PlaylistId, user: &UserId) -> Result<()> {
        let denial = match self.verify_owner(playlist, user).await {
            Ok(()) => return Ok(()),
            Err(err) if err.is_not_found() => return Err(err),
            Err(err) => err,
        };

        match self.verifier.verify_collaborator(playlist, user).await {
            Ok(()) => Ok(()),
            Err(err) => {
                // A genuine verifier fault is masked here too; keep it
                // visible to operators at least.
                warn!(playlist = %playlist, user = %user, error = %err,
                    "collaboration check failed, reporting ownership denial");
                Err(denial)
            }
        }
    }
}

/// Default `CollaborationVerifier` backed by the collaborations relation,
/// plus the grant management operations
pub struct StoreCollaborations {
    pool: SqlitePool,
}

impl StoreCollaborations {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Grant `user` collaborator rights on `playlist`
    pub async fn add(&self, playlist: &PlaylistId, user: &UserId) -> Result<CollaborationId> {
        if chord_storage::collaborations::exists(&self.pool, playlist, user).await? {
            return Err(ChordError::invariant("user is already a collaborator"));
        }

        chord_storage::collaborations::insert(&self.pool, playlist, user).await
    }

    /// Revoke a grant
    pub async fn remove(&self, playlist: &PlaylistId, user: &UserId) -> Result<()> {
        let rows = chord_storage::collaborations::delete(&self.pool, playlist, user).await?;
        if rows == 0 {
            return Err(ChordError::invariant("collaboration not found"));
        }
        Ok(())
    }
}

#[async_trait]
impl CollaborationVerifier for StoreCollaborations {
    async fn verify_collaborator(&self, playlist: &PlaylistId, user: &UserId) -> Result<()> {
        if chord_storage::collaborations::exists(&self.pool, playlist, user).await? {
            Ok(())
        } else {
            Err(ChordError::not_found("Collaboration", playlist.as_str()))
        }
    }
}
