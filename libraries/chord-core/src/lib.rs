//! Chord Core
//!
//! Domain types, trait seams, and error handling for the Chord catalog and
//! collaboration services.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Album`, `Song`, `Playlist`, `ActivityEntry`, etc.
//! - **Trait Seams**: `CacheStore` (Cache Gateway), `CollaborationVerifier`
//! - **Error Handling**: Unified `ChordError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use chord_core::types::{CreateAlbum, PlaylistId};
//!
//! let _album = CreateAlbum {
//!     name: "Viva la Vida".to_string(),
//!     year: 2008,
//! };
//!
//! let playlist = PlaylistId::generate();
//! assert!(playlist.as_str().starts_with("playlist-"));
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{ChordError, Result};
pub use traits::{CacheError, CacheStore, CollaborationVerifier};
pub use types::{
    ActivityAction, ActivityEntry, ActivityId, Album, AlbumId, AlbumWithSongs, Collaboration,
    CollaborationId, CreateAlbum, CreateSong, LikeCount, LikeId, Playlist, PlaylistId,
    PlaylistSong, PlaylistSongId, PlaylistSummary, PlaylistWithSongs, Song, SongId, UpdateAlbum,
    User, UserId,
};
