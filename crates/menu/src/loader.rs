//! Loads and validates the menu document from a source seam.

use async_trait::async_trait;
use thiserror::Error;

use crate::document::MenuDocument;

/// Raw response from a menu source: transport status plus body bytes.
#[derive(Debug, Clone)]
pub struct SourceResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl SourceResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Where menu bytes come from: an HTTP client, the offline cache, or an
/// embedded asset table.
#[async_trait]
pub trait MenuSource: Send + Sync {
    async fn get(&self, url: &str) -> anyhow::Result<SourceResponse>;
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request for {url} failed")]
    Fetch {
        url: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("unexpected status {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("invalid menu payload from {url}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("menu payload from {url} is not an object")]
    Shape { url: String },
}

/// Fetches `url` from `source` and parses the body into a [`MenuDocument`].
///
/// Any transport error, non-success status, JSON syntax error, or top-level
/// value that is not an object is a load failure. An object with zero days
/// parses fine here; the screen controller treats that case separately.
pub async fn load(source: &impl MenuSource, url: &str) -> Result<MenuDocument, LoadError> {
    let response = source.get(url).await.map_err(|source| LoadError::Fetch {
        url: url.to_owned(),
        source,
    })?;

    if !response.is_success() {
        return Err(LoadError::Status {
            url: url.to_owned(),
            status: response.status,
        });
    }

    parse_document(&response.body, url)
}

/// Parses raw menu bytes, naming `url` in any error.
pub fn parse_document(body: &[u8], url: &str) -> Result<MenuDocument, LoadError> {
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|source| LoadError::Parse {
            url: url.to_owned(),
            source,
        })?;

    MenuDocument::from_value(value).ok_or_else(|| LoadError::Shape {
        url: url.to_owned(),
    })
}
