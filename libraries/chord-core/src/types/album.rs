//! Album types

use super::{AlbumId, Song};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An album
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub id: AlbumId,
    pub name: String,
    pub year: i32,
    pub cover_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a new album
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAlbum {
    pub name: String,
    pub year: i32,
}

/// Data for updating an existing album
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAlbum {
    pub name: String,
    pub year: i32,
}

/// An album composed with its songs
///
/// This is the shape the catalog returns from `get_album` and the payload
/// cached under `album:{id}`. Timestamps are deliberately excluded: the
/// cached projection only carries what read clients consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumWithSongs {
    pub id: AlbumId,
    pub name: String,
    pub year: i32,
    pub cover_url: Option<String>,
    pub songs: Vec<Song>,
}

/// Like count for an album, with its provenance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeCount {
    /// Number of distinct liking users
    pub count: i64,

    /// True when the count was served from the cache
    pub from_cache: bool,
}
