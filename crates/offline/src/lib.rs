//! Offline cache for the menu board.
//!
//! A process-level port of the board's service-worker behavior: a versioned
//! store of pre-declared assets with an install/activate lifecycle and
//! cache-first request resolution that falls back to the live network and,
//! failing that, to the cached page shell. Storage and network access sit
//! behind traits; a SQLite backend covers real runs and an in-memory one
//! covers tests.

pub mod sqlite;
pub mod store;
pub mod worker;

pub use sqlite::{SqliteCacheStorage, SqliteCacheStore};
pub use store::{CacheStorage, CacheStore, CachedResponse, MemoryCacheStorage, Network};
pub use worker::{AssetManifest, CacheError, OfflineCache, Phase};
