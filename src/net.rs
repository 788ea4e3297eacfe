//! Network plumbing for the terminal client: the reqwest-backed network,
//! the versioned offline asset manifest, and the transport that routes menu
//! fetches through the offline cache when it is up.

use async_trait::async_trait;
use sqlx::sqlite::SqlitePoolOptions;

use messboard_menu::{MenuSource, SourceResponse};
use messboard_offline::{
    AssetManifest, CachedResponse, Network, OfflineCache, SqliteCacheStorage,
};

use crate::config::Config;
use crate::error::AppError;

/// Relative URLs every deployed version keeps available offline.
pub const OFFLINE_ASSETS: [&str; 5] = [
    "/",
    "/static/styles.css",
    "/static/menu-veg.json",
    "/static/menu-nonveg.json",
    "/manifest.json",
];

/// Current cache store name. Bump the suffix when the asset set changes;
/// activation then collects the store of the previous version.
pub const CACHE_STORE: &str = "messboard-v1";

#[derive(Debug, Clone, Default)]
pub struct HttpNetwork {
    client: reqwest::Client,
}

impl HttpNetwork {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Network for HttpNetwork {
    async fn fetch(&self, url: &str) -> anyhow::Result<CachedResponse> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(String::from);
        let body = response.bytes().await?.to_vec();
        Ok(CachedResponse {
            status,
            content_type,
            body,
        })
    }
}

/// The absolute asset manifest for this deployment, rooted at `origin`.
pub fn offline_manifest(origin: &str) -> Result<AssetManifest, AppError> {
    let base = url::Url::parse(origin).map_err(|source| AppError::Origin {
        origin: origin.to_string(),
        source,
    })?;

    let mut assets = Vec::with_capacity(OFFLINE_ASSETS.len());
    for path in OFFLINE_ASSETS {
        let joined = base.join(path).map_err(|source| AppError::Origin {
            origin: origin.to_string(),
            source,
        })?;
        assets.push(joined.to_string());
    }

    let shell = assets[0].clone();
    Ok(AssetManifest::new(CACHE_STORE, shell, assets))
}

/// How the client reaches the menu: through the active offline cache, or
/// directly when the cache is disabled or could not come up.
pub enum MenuTransport {
    Cached(OfflineCache<SqliteCacheStorage, HttpNetwork>),
    Direct(HttpNetwork),
}

#[async_trait]
impl MenuSource for MenuTransport {
    async fn get(&self, url: &str) -> anyhow::Result<SourceResponse> {
        let response = match self {
            MenuTransport::Cached(cache) => cache.handle_fetch(url).await?,
            MenuTransport::Direct(network) => network.fetch(url).await?,
        };
        Ok(SourceResponse {
            status: response.status,
            body: response.body,
        })
    }
}

/// Brings the offline cache up for a client run: adopt the store a previous
/// run of this version left behind, or install a fresh one, then activate.
/// A failed install is the host's retry concern, not ours; the client
/// degrades to direct network access for this run.
pub async fn connect_transport(config: &Config) -> Result<MenuTransport, AppError> {
    if !config.offline.enabled {
        return Ok(MenuTransport::Direct(HttpNetwork::new()));
    }

    let manifest = offline_manifest(&config.offline.origin)?;

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(&config.offline.database_url)
        .await?;
    let storage = SqliteCacheStorage::new(pool);
    storage.setup().await?;

    let mut cache = OfflineCache::new(storage, HttpNetwork::new(), manifest);
    if !cache.restore().await? {
        if let Err(err) = cache.install().await {
            tracing::warn!(error = %err, "offline cache install failed, continuing without cache");
            return Ok(MenuTransport::Direct(HttpNetwork::new()));
        }
    }
    cache.activate().await?;

    Ok(MenuTransport::Cached(cache))
}
