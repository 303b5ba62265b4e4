//! Song types

use super::{AlbumId, SongId};
use serde::{Deserialize, Serialize};

/// A song
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: SongId,
    pub title: String,
    pub performer: String,
    /// Album this song belongs to, if any (back-reference, not containment)
    pub album_id: Option<AlbumId>,
}

/// Data for creating a new song
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSong {
    pub title: String,
    pub performer: String,
    pub album_id: Option<AlbumId>,
}
