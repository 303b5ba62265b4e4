/// Playlist domain types
use crate::types::{PlaylistId, Song, UserId};
use serde::{Deserialize, Serialize};

/// Playlist
///
/// Exactly one owner, assigned at creation; ownership is immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Playlist name
    pub name: String,

    /// Owner user ID
    pub owner: UserId,
}

/// Playlist as listed for a user: id, name and the owner's username
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistSummary {
    pub id: PlaylistId,
    pub name: String,
    pub username: String,
}

/// A playlist composed with its songs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistWithSongs {
    pub id: PlaylistId,
    pub name: String,
    /// Username of the owner
    pub username: String,
    pub songs: Vec<Song>,
}

/// Playlist/song association row
///
/// Membership is a bag, not a set: each add inserts a fresh association row
/// and duplicates are not collapsed at this layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistSong {
    pub id: super::PlaylistSongId,
    pub playlist_id: PlaylistId,
    pub song_id: super::SongId,
}

/// Collaboration grant: gives a non-owner user act-on-playlist rights
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collaboration {
    /// Playlist the grant applies to
    pub playlist_id: PlaylistId,

    /// Grantee user ID
    pub user_id: UserId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playlist_serde_round_trip() {
        let playlist = Playlist {
            id: PlaylistId::new("playlist-1"),
            name: "Road Trip".to_string(),
            owner: UserId::new("user-1"),
        };

        let json = serde_json::to_string(&playlist).unwrap();
        let back: Playlist = serde_json::from_str(&json).unwrap();
        assert_eq!(back, playlist);
    }
}
