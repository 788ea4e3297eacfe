//! Storage and network seams the offline cache operates over.
//!
//! A cache backend is a set of named stores, each mapping a URL to a stored
//! response. Stores come into existence when something is put into them and
//! are enumerable and removable by name, which is all the lifecycle needs
//! for version garbage collection.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

/// A response as kept by the cache: status, media type, raw body.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl CachedResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One named store of URL keyed responses.
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn put(&self, url: &str, response: &CachedResponse) -> anyhow::Result<()>;
    async fn get(&self, url: &str) -> anyhow::Result<Option<CachedResponse>>;
}

/// A backend holding any number of named stores.
#[async_trait]
pub trait CacheStorage: Send + Sync {
    type Store: CacheStore;

    async fn open(&self, name: &str) -> anyhow::Result<Self::Store>;
    /// Names of every store that currently holds at least one entry.
    async fn store_names(&self) -> anyhow::Result<Vec<String>>;
    async fn remove(&self, name: &str) -> anyhow::Result<()>;
}

/// Live network access, as the cache sees it.
#[async_trait]
pub trait Network: Send + Sync {
    async fn fetch(&self, url: &str) -> anyhow::Result<CachedResponse>;
}

type StoreMap = HashMap<String, HashMap<String, CachedResponse>>;

/// In-memory backend for tests and doubles. Clones share the same stores.
#[derive(Debug, Clone, Default)]
pub struct MemoryCacheStorage {
    stores: Arc<Mutex<StoreMap>>,
}

impl MemoryCacheStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, StoreMap> {
        self.stores.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl CacheStorage for MemoryCacheStorage {
    type Store = MemoryCacheStore;

    async fn open(&self, name: &str) -> anyhow::Result<MemoryCacheStore> {
        Ok(MemoryCacheStore {
            storage: self.clone(),
            name: name.to_owned(),
        })
    }

    async fn store_names(&self) -> anyhow::Result<Vec<String>> {
        Ok(self.lock().keys().cloned().collect())
    }

    async fn remove(&self, name: &str) -> anyhow::Result<()> {
        self.lock().remove(name);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct MemoryCacheStore {
    storage: MemoryCacheStorage,
    name: String,
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn put(&self, url: &str, response: &CachedResponse) -> anyhow::Result<()> {
        self.storage
            .lock()
            .entry(self.name.clone())
            .or_default()
            .insert(url.to_owned(), response.clone());
        Ok(())
    }

    async fn get(&self, url: &str) -> anyhow::Result<Option<CachedResponse>> {
        Ok(self
            .storage
            .lock()
            .get(&self.name)
            .and_then(|entries| entries.get(url))
            .cloned())
    }
}
