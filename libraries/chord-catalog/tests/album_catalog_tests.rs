//! Integration tests for the album catalog cache layer
//!
//! The properties under test: cache hits skip the store, writes invalidate
//! before returning, `NotFound` is never cached, and a fully broken cache
//! never affects correctness.

mod test_helpers;

use chord_catalog::cache::{album_key, album_likes_key};
use chord_catalog::{AlbumCatalog, MemoryCache};
use chord_core::types::*;
use chord_core::{CacheStore, ChordError};
use std::sync::Arc;
use test_helpers::*;

fn catalog_with_cache(pool: &sqlx::SqlitePool) -> (AlbumCatalog, Arc<MemoryCache>) {
    let cache = Arc::new(MemoryCache::default());
    (AlbumCatalog::new(pool.clone(), cache.clone()), cache)
}

#[tokio::test]
async fn test_get_album_composes_songs() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    let (catalog, _) = catalog_with_cache(pool);

    let id = create_test_album(pool, "X", 2000).await;

    let album = catalog.get_album(&id).await.unwrap();
    assert_eq!(album.id, id);
    assert_eq!(album.name, "X");
    assert_eq!(album.year, 2000);
    assert!(album.songs.is_empty());
}

#[tokio::test]
async fn test_edit_album_is_visible_on_next_read() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    let (catalog, _) = catalog_with_cache(pool);

    let id = create_test_album(pool, "X", 2000).await;

    // Prime the cache, then mutate; the next read must not see the original
    let original = catalog.get_album(&id).await.unwrap();
    assert_eq!(original.name, "X");

    catalog
        .update_album(
            &id,
            &UpdateAlbum {
                name: "Y".to_string(),
                year: 2001,
            },
        )
        .await
        .unwrap();

    let updated = catalog.get_album(&id).await.unwrap();
    assert_eq!(updated.name, "Y");
    assert_eq!(updated.year, 2001);
}

#[tokio::test]
async fn test_cache_hit_does_not_touch_the_store() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    let (catalog, _) = catalog_with_cache(pool);

    let id = create_test_album(pool, "Cached", 2012).await;
    catalog.get_album(&id).await.unwrap();

    // Yank the row out from under the cache, bypassing the catalog
    sqlx::query("DELETE FROM albums WHERE id = ?")
        .bind(id.as_str())
        .execute(pool)
        .await
        .unwrap();

    let album = catalog.get_album(&id).await.unwrap();
    assert_eq!(album.name, "Cached", "hit must be served without the store");
}

#[tokio::test]
async fn test_delete_album_invalidates_cached_entry() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    let (catalog, _) = catalog_with_cache(pool);

    let id = create_test_album(pool, "Doomed", 1999).await;
    catalog.get_album(&id).await.unwrap();

    catalog.delete_album(&id).await.unwrap();

    let err = catalog.get_album(&id).await.unwrap_err();
    assert!(matches!(err, ChordError::NotFound { .. }));
}

#[tokio::test]
async fn test_set_cover_invalidates_cached_entry() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    let (catalog, _) = catalog_with_cache(pool);

    let id = create_test_album(pool, "Art", 2018).await;
    assert_eq!(catalog.get_album(&id).await.unwrap().cover_url, None);

    catalog
        .set_cover(&id, "https://img.example/art.png")
        .await
        .unwrap();

    assert_eq!(
        catalog.get_album(&id).await.unwrap().cover_url,
        Some("https://img.example/art.png".to_string())
    );
}

#[tokio::test]
async fn test_not_found_is_never_cached() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    let (catalog, cache) = catalog_with_cache(pool);

    let id = AlbumId::new("album-missing");
    let err = catalog.get_album(&id).await.unwrap_err();
    assert!(matches!(err, ChordError::NotFound { .. }));

    assert_eq!(cache.get(&album_key(&id)).await.unwrap(), None);

    let err = catalog.get_like_count(&id).await.unwrap_err();
    assert!(matches!(err, ChordError::NotFound { .. }));
    assert_eq!(cache.get(&album_likes_key(&id)).await.unwrap(), None);
}

#[tokio::test]
async fn test_corrupt_cache_entry_falls_back_to_store() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    let (catalog, cache) = catalog_with_cache(pool);

    let id = create_test_album(pool, "Resilient", 2005).await;
    cache
        .set(&album_key(&id), b"not json".to_vec(), None)
        .await
        .unwrap();

    let album = catalog.get_album(&id).await.unwrap();
    assert_eq!(album.name, "Resilient");
}

#[tokio::test]
async fn test_like_count_provenance_and_invalidation() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    let (catalog, _) = catalog_with_cache(pool);

    let id = create_test_album(pool, "Liked", 2022).await;
    let alice = create_test_user(pool, "alice").await;
    let bob = create_test_user(pool, "bob").await;

    catalog.like(&id, &alice).await.unwrap();

    let first = catalog.get_like_count(&id).await.unwrap();
    assert_eq!(first.count, 1);
    assert!(!first.from_cache);

    let second = catalog.get_like_count(&id).await.unwrap();
    assert_eq!(second.count, 1);
    assert!(second.from_cache);

    // A new like invalidates the cached count before returning
    catalog.like(&id, &bob).await.unwrap();

    let third = catalog.get_like_count(&id).await.unwrap();
    assert_eq!(third.count, 2);
    assert!(!third.from_cache);

    catalog.unlike(&id, &alice).await.unwrap();

    let fourth = catalog.get_like_count(&id).await.unwrap();
    assert_eq!(fourth.count, 1);
    assert!(!fourth.from_cache);
}

#[tokio::test]
async fn test_double_like_violates_invariant() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    let (catalog, _) = catalog_with_cache(pool);

    let id = create_test_album(pool, "Once", 2019).await;
    let user = create_test_user(pool, "fan").await;

    catalog.like(&id, &user).await.unwrap();

    let err = catalog.like(&id, &user).await.unwrap_err();
    assert!(matches!(err, ChordError::InvariantViolation(_)));

    let count = catalog.get_like_count(&id).await.unwrap();
    assert_eq!(count.count, 1);
}

#[tokio::test]
async fn test_unlike_without_like_violates_invariant() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    let (catalog, _) = catalog_with_cache(pool);

    let id = create_test_album(pool, "Unloved", 2001).await;
    let user = create_test_user(pool, "stranger").await;

    let err = catalog.unlike(&id, &user).await.unwrap_err();
    assert!(matches!(err, ChordError::InvariantViolation(_)));
}

#[tokio::test]
async fn test_like_missing_album_is_not_found() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    let (catalog, _) = catalog_with_cache(pool);

    let user = create_test_user(pool, "fan").await;

    let err = catalog
        .like(&AlbumId::new("album-missing"), &user)
        .await
        .unwrap_err();
    assert!(matches!(err, ChordError::NotFound { .. }));
}

#[tokio::test]
async fn test_everything_works_with_the_cache_down() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    let catalog = AlbumCatalog::new(pool.clone(), Arc::new(FailingCache));

    let id = create_test_album(pool, "X", 2000).await;
    let user = create_test_user(pool, "fan").await;

    let album = catalog.get_album(&id).await.unwrap();
    assert_eq!(album.name, "X");

    catalog
        .update_album(
            &id,
            &UpdateAlbum {
                name: "Y".to_string(),
                year: 2001,
            },
        )
        .await
        .unwrap();
    assert_eq!(catalog.get_album(&id).await.unwrap().name, "Y");

    catalog.like(&id, &user).await.unwrap();
    let count = catalog.get_like_count(&id).await.unwrap();
    assert_eq!(count.count, 1);
    assert!(!count.from_cache);

    catalog.delete_album(&id).await.unwrap();
    let err = catalog.get_album(&id).await.unwrap_err();
    assert!(matches!(err, ChordError::NotFound { .. }));
}
