//! End-to-end flow of the terminal client's transport: a SQLite-backed
//! offline cache adopted from a previous run, with the network unreachable.
//!
//! The origin points at the discard port so every live fetch fails fast,
//! which is exactly the offline situation the cache exists for.

use sqlx::sqlite::SqlitePoolOptions;

use messboard::net::{HttpNetwork, MenuTransport, offline_manifest};
use messboard_menu::LoadError;
use messboard_offline::{
    CacheStorage, CacheStore, CachedResponse, OfflineCache, SqliteCacheStorage,
};

const ORIGIN: &str = "http://127.0.0.1:9";

async fn seeded_storage() -> SqliteCacheStorage {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    let storage = SqliteCacheStorage::new(pool);
    storage.setup().await.unwrap();

    let manifest = offline_manifest(ORIGIN).unwrap();
    let store = storage.open(&manifest.store_name).await.unwrap();
    for url in &manifest.assets {
        let response = if url.ends_with(".json") {
            CachedResponse {
                status: 200,
                content_type: Some("application/json".to_string()),
                body: include_bytes!("../static/menu-veg.json").to_vec(),
            }
        } else {
            CachedResponse {
                status: 200,
                content_type: Some("text/html; charset=utf-8".to_string()),
                body: b"<!DOCTYPE html><html><body>Mess Menu</body></html>".to_vec(),
            }
        };
        store.put(url, &response).await.unwrap();
    }

    storage
}

async fn cached_transport(storage: SqliteCacheStorage) -> MenuTransport {
    let manifest = offline_manifest(ORIGIN).unwrap();
    let mut cache = OfflineCache::new(storage, HttpNetwork::new(), manifest);
    assert!(cache.restore().await.unwrap(), "seeded store should be adopted");
    cache.activate().await.unwrap();
    MenuTransport::Cached(cache)
}

#[tokio::test]
async fn cached_menu_loads_with_the_network_down() {
    let transport = cached_transport(seeded_storage().await).await;

    let url = format!("{ORIGIN}/static/menu-veg.json");
    let document = messboard_menu::load(&transport, &url).await.unwrap();

    assert!(document.contains_day("Monday"));
    assert!(document.contains_day("Sunday"));
}

#[tokio::test]
async fn uncached_urls_fall_back_to_the_shell_which_fails_to_parse() {
    let transport = cached_transport(seeded_storage().await).await;

    // Not in the manifest, network unreachable: the cache serves the page
    // shell, which is HTML, so the loader reports a parse failure rather
    // than a transport one.
    let url = format!("{ORIGIN}/static/menu-special.json");
    let err = messboard_menu::load(&transport, &url).await.unwrap_err();

    assert!(matches!(err, LoadError::Parse { .. }), "got {err:?}");
}

#[tokio::test]
async fn a_fresh_cache_database_has_nothing_to_restore() {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    let storage = SqliteCacheStorage::new(pool);
    storage.setup().await.unwrap();

    let manifest = offline_manifest(ORIGIN).unwrap();
    let mut cache = OfflineCache::new(storage, HttpNetwork::new(), manifest);

    assert!(!cache.restore().await.unwrap());
}
