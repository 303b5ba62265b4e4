//! Domain types for the Chord catalog core

mod activity;
mod album;
mod ids;
mod playlist;
mod song;
mod user;

pub use activity::{ActivityAction, ActivityEntry};
pub use album::{Album, AlbumWithSongs, CreateAlbum, LikeCount, UpdateAlbum};
pub use ids::{
    ActivityId, AlbumId, CollaborationId, LikeId, PlaylistId, PlaylistSongId, SongId, UserId,
};
pub use playlist::{Collaboration, Playlist, PlaylistSong, PlaylistSummary, PlaylistWithSongs};
pub use song::{CreateSong, Song};
pub use user::User;
