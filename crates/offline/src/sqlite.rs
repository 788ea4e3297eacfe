//! SQLite-backed cache storage.
//!
//! All stores share one table keyed by `(store, url)`, so enumerating and
//! dropping a version's store are plain queries. A store exists exactly as
//! long as it holds at least one entry.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use crate::store::{CacheStorage, CacheStore, CachedResponse};

#[derive(Debug, Clone)]
pub struct SqliteCacheStorage {
    pool: SqlitePool,
}

impl SqliteCacheStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates the cache table when missing. Run once before first use.
    pub async fn setup(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS cache_entry (
                store TEXT NOT NULL,
                url TEXT NOT NULL,
                status INTEGER NOT NULL,
                content_type TEXT,
                body BLOB NOT NULL,
                PRIMARY KEY (store, url)
            )",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl CacheStorage for SqliteCacheStorage {
    type Store = SqliteCacheStore;

    async fn open(&self, name: &str) -> anyhow::Result<SqliteCacheStore> {
        Ok(SqliteCacheStore {
            pool: self.pool.clone(),
            store: name.to_owned(),
        })
    }

    async fn store_names(&self) -> anyhow::Result<Vec<String>> {
        let rows = sqlx::query("SELECT DISTINCT store FROM cache_entry ORDER BY store")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.iter().map(|row| row.get("store")).collect())
    }

    async fn remove(&self, name: &str) -> anyhow::Result<()> {
        sqlx::query("DELETE FROM cache_entry WHERE store = ?")
            .bind(name)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct SqliteCacheStore {
    pool: SqlitePool,
    store: String,
}

#[async_trait]
impl CacheStore for SqliteCacheStore {
    async fn put(&self, url: &str, response: &CachedResponse) -> anyhow::Result<()> {
        sqlx::query(
            "INSERT INTO cache_entry (store, url, status, content_type, body)
             VALUES (?, ?, ?, ?, ?)
             ON CONFLICT (store, url) DO UPDATE SET
                 status = excluded.status,
                 content_type = excluded.content_type,
                 body = excluded.body",
        )
        .bind(&self.store)
        .bind(url)
        .bind(i64::from(response.status))
        .bind(&response.content_type)
        .bind(&response.body)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get(&self, url: &str) -> anyhow::Result<Option<CachedResponse>> {
        let row = sqlx::query(
            "SELECT status, content_type, body FROM cache_entry WHERE store = ? AND url = ?",
        )
        .bind(&self.store)
        .bind(url)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| CachedResponse {
            status: row.get::<i64, _>("status") as u16,
            content_type: row.get("content_type"),
            body: row.get("body"),
        }))
    }
}
