//! Playlist Mutation Orchestrator
//!
//! Composes the Authorization Resolver, the store gateway, and the Activity
//! Recorder. The mutation steps are deliberately not wrapped in a single
//! transaction: a failure between the association write and the activity
//! append surfaces the append's own error and leaves the association in
//! place (see DESIGN.md).

use crate::access::PlaylistAccess;
use crate::activity::ActivityLog;
use chord_core::{
    ActivityAction, ActivityEntry, ChordError, CollaborationVerifier, PlaylistId, PlaylistSummary,
    PlaylistWithSongs, Result, SongId, UserId,
};
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct PlaylistService {
    pool: SqlitePool,
    access: PlaylistAccess,
    log: ActivityLog,
}

impl PlaylistService {
    pub fn new(pool: SqlitePool, verifier: Arc<dyn CollaborationVerifier>) -> Self {
        let access = PlaylistAccess::new(pool.clone(), verifier);
        let log = ActivityLog::new(pool.clone());
        Self { pool, access, log }
    }

    /// The resolver, for callers that must resolve access before mutating
    pub fn access(&self) -> &PlaylistAccess {
        &self.access
    }

    pub async fn create_playlist(&self, name: &str, owner: &UserId) -> Result<PlaylistId> {
        chord_storage::playlists::create(&self.pool, name, owner).await
    }

    /// Playlists the user owns or collaborates on
    pub async fn playlists_for(&self, user: &UserId) -> Result<Vec<PlaylistSummary>> {
        chord_storage::playlists::get_for_user(&self.pool, user).await
    }

    pub async fn delete_playlist(&self, id: &PlaylistId) -> Result<()> {
        let rows = chord_storage::playlists::delete(&self.pool, id).await?;
        if rows == 0 {
            return Err(ChordError::not_found("Playlist", id.as_str()));
        }
        Ok(())
    }

    /// Attach a song to a playlist and record the mutation
    ///
    /// Access must already be resolved by the caller (via [`Self::access`]);
    /// this only verifies that the song exists. Each call inserts a fresh
    /// association row.
    pub async fn add_song(
        &self,
        playlist: &PlaylistId,
        song: &SongId,
        user: &UserId,
    ) -> Result<()> {
        chord_storage::songs::get_by_id(&self.pool, song)
            .await?
            .ok_or_else(|| ChordError::not_found("Song", song.as_str()))?;

        chord_storage::playlists::add_song(&self.pool, playlist, song).await?;

        self.log
            .record(playlist, song, user, ActivityAction::Add)
            .await
    }

    /// Detach a song from a playlist and record the mutation
    pub async fn remove_song(
        &self,
        playlist: &PlaylistId,
        song: &SongId,
        user: &UserId,
    ) -> Result<()> {
        let rows = chord_storage::playlists::remove_song(&self.pool, playlist, song).await?;
        if rows == 0 {
            return Err(ChordError::invariant("song is not in the playlist"));
        }

        self.log
            .record(playlist, song, user, ActivityAction::Delete)
            .await
    }

    /// Playlist composed with its songs; resolves access first
    pub async fn playlist_with_songs(
        &self,
        playlist: &PlaylistId,
        user: &UserId,
    ) -> Result<PlaylistWithSongs> {
        self.access.verify_access(playlist, user).await?;

        let found = chord_storage::playlists::get_by_id(&self.pool, playlist)
            .await?
            .ok_or_else(|| ChordError::not_found("Playlist", playlist.as_str()))?;

        let owner = chord_storage::users::get_by_id(&self.pool, &found.owner)
            .await?
            .ok_or_else(|| ChordError::not_found("User", found.owner.as_str()))?;

        let songs = chord_storage::playlists::songs_of(&self.pool, playlist).await?;

        Ok(PlaylistWithSongs {
            id: found.id,
            name: found.name,
            username: owner.username,
            songs,
        })
    }

    /// Audit trail for a playlist, oldest first
    ///
    /// The playlist must exist; the log itself never checks.
    pub async fn activities(&self, playlist: &PlaylistId) -> Result<Vec<ActivityEntry>> {
        chord_storage::playlists::get_by_id(&self.pool, playlist)
            .await?
            .ok_or_else(|| ChordError::not_found("Playlist", playlist.as_str()))?;

        self.log.activities(playlist).await
    }
}
