//! The offline cache lifecycle: install, activate, fetch interception.
//!
//! The lifecycle is the explicit object form of what a browser drives
//! through service-worker events. One deployed version owns one named
//! store; a version bump changes the store name and activation garbage
//! collects every other store left behind.

use thiserror::Error;

use crate::store::{CacheStorage, CacheStore, CachedResponse, Network};

/// Lifecycle phase. Fetch interception is only available once active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Installed,
    Active,
}

/// The fixed set of assets one deployed version keeps available offline.
#[derive(Debug, Clone)]
pub struct AssetManifest {
    pub store_name: String,
    pub shell_url: String,
    pub assets: Vec<String>,
}

impl AssetManifest {
    /// The shell is always part of the asset list; it is the last-resort
    /// fallback and must be cached for the lifecycle to be worth entering.
    pub fn new(store_name: impl Into<String>, shell_url: impl Into<String>, mut assets: Vec<String>) -> Self {
        let shell_url = shell_url.into();
        if !assets.iter().any(|url| *url == shell_url) {
            assets.insert(0, shell_url.clone());
        }
        Self {
            store_name: store_name.into(),
            shell_url,
            assets,
        }
    }
}

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache storage failed")]
    Storage(#[from] anyhow::Error),

    #[error("install could not fetch {url}")]
    InstallFetch {
        url: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("install got status {status} for {url}")]
    InstallStatus { url: String, status: u16 },

    #[error("no cached entry for {url} and no usable fallback")]
    Unreachable { url: String },

    #[error("{op} requires phase {expected:?}, cache is {actual:?}")]
    Phase {
        op: &'static str,
        expected: Phase,
        actual: Phase,
    },
}

pub struct OfflineCache<B, N> {
    storage: B,
    network: N,
    manifest: AssetManifest,
    phase: Phase,
}

impl<B: CacheStorage, N: Network> OfflineCache<B, N> {
    pub fn new(storage: B, network: N, manifest: AssetManifest) -> Self {
        Self {
            storage,
            network,
            manifest,
            phase: Phase::Uninitialized,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn manifest(&self) -> &AssetManifest {
        &self.manifest
    }

    /// Populates the store with every manifest asset, all or nothing: every
    /// URL is fetched first, and a single failed or non-success fetch fails
    /// the install with nothing stored. Retrying is the caller's policy.
    pub async fn install(&mut self) -> Result<(), CacheError> {
        self.expect_phase("install", Phase::Uninitialized)?;

        let network = &self.network;
        let fetches = self.manifest.assets.iter().map(|url| async move {
            let response = network
                .fetch(url)
                .await
                .map_err(|source| CacheError::InstallFetch {
                    url: url.clone(),
                    source,
                })?;
            if !response.is_success() {
                return Err(CacheError::InstallStatus {
                    url: url.clone(),
                    status: response.status,
                });
            }
            Ok((url.clone(), response))
        });
        let fetched = futures::future::try_join_all(fetches).await?;

        let store = self.storage.open(&self.manifest.store_name).await?;
        for (url, response) in &fetched {
            store.put(url, response).await?;
        }

        self.phase = Phase::Installed;
        tracing::info!(
            store = %self.manifest.store_name,
            assets = fetched.len(),
            "offline cache installed"
        );
        Ok(())
    }

    /// Adopts a store a previous run of the same version already populated,
    /// skipping the install fetches. Returns false when there is nothing to
    /// adopt (no current store, or one without the shell).
    pub async fn restore(&mut self) -> Result<bool, CacheError> {
        self.expect_phase("restore", Phase::Uninitialized)?;

        let names = self.storage.store_names().await?;
        if !names.iter().any(|name| *name == self.manifest.store_name) {
            return Ok(false);
        }

        let store = self.storage.open(&self.manifest.store_name).await?;
        if store.get(&self.manifest.shell_url).await?.is_none() {
            return Ok(false);
        }

        self.phase = Phase::Installed;
        tracing::debug!(store = %self.manifest.store_name, "adopted existing offline cache");
        Ok(true)
    }

    /// Garbage collects every store that does not belong to this version,
    /// then enables fetch interception.
    pub async fn activate(&mut self) -> Result<(), CacheError> {
        self.expect_phase("activate", Phase::Installed)?;

        for name in self.storage.store_names().await? {
            if name != self.manifest.store_name {
                self.storage.remove(&name).await?;
                tracing::info!(store = %name, "removed stale cache store");
            }
        }

        self.phase = Phase::Active;
        Ok(())
    }

    /// Resolves a request cache-first: a stored response is served verbatim
    /// without touching the network. On a miss the live response is returned
    /// whatever its status; only a failed live fetch falls back to the
    /// cached shell.
    pub async fn handle_fetch(&self, url: &str) -> Result<CachedResponse, CacheError> {
        self.expect_phase("fetch interception", Phase::Active)?;

        let store = self.storage.open(&self.manifest.store_name).await?;
        if let Some(cached) = store.get(url).await? {
            tracing::debug!(url, "served from offline cache");
            return Ok(cached);
        }

        match self.network.fetch(url).await {
            Ok(response) => Ok(response),
            Err(err) => {
                tracing::debug!(url, error = %err, "network unavailable, falling back to shell");
                store
                    .get(&self.manifest.shell_url)
                    .await?
                    .ok_or_else(|| CacheError::Unreachable {
                        url: url.to_owned(),
                    })
            }
        }
    }

    fn expect_phase(&self, op: &'static str, expected: Phase) -> Result<(), CacheError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(CacheError::Phase {
                op,
                expected,
                actual: self.phase,
            })
        }
    }
}
