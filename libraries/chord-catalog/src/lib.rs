//! Chord Catalog
//!
//! Access-control resolution and cache-consistency services for the Chord
//! album and playlist catalog.
//!
//! # Components
//!
//! - [`AlbumCatalog`] — cache-aside album reads and like counts with
//!   write-triggered invalidation
//! - [`PlaylistAccess`] — owner-or-collaborator authorization resolution
//! - [`ActivityLog`] — append-only record of playlist mutations
//! - [`PlaylistService`] — playlist mutations composing the above
//! - [`MemoryCache`] — in-process `CacheStore` implementation
//!
//! All components take their pool, cache, and verifier at construction;
//! there is no process-global state.
//!
//! # Example
//!
//! ```rust,no_run
//! use chord_catalog::{AlbumCatalog, MemoryCache};
//! use chord_core::types::CreateAlbum;
//! use std::sync::Arc;
//!
//! # async fn example() -> chord_core::Result<()> {
//! let pool = chord_storage::create_pool("sqlite://chord.db").await?;
//! chord_storage::run_migrations(&pool).await?;
//!
//! let catalog = AlbumCatalog::new(pool, Arc::new(MemoryCache::default()));
//! let id = catalog
//!     .create_album(CreateAlbum { name: "Viva la Vida".into(), year: 2008 })
//!     .await?;
//! let _album = catalog.get_album(&id).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod access;
pub mod activity;
pub mod albums;
pub mod cache;
pub mod playlists;

pub use access::{PlaylistAccess, StoreCollaborations};
pub use activity::ActivityLog;
pub use albums::AlbumCatalog;
pub use cache::{album_key, album_likes_key, MemoryCache};
pub use playlists::PlaylistService;
