use axum::extract::Path;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use rust_embed::RustEmbed;

use crate::error::AppError;

#[derive(RustEmbed)]
#[folder = "static/"]
pub struct Assets;

/// Raw bytes of an embedded asset, for in-process consumers.
pub fn embedded(path: &str) -> Option<Vec<u8>> {
    Assets::get(path).map(|content| content.data.into_owned())
}

/// GET /static/{path} - embedded static assets
pub async fn serve(Path(path): Path<String>) -> Result<Response, AppError> {
    let content = Assets::get(&path).ok_or_else(|| AppError::AssetNotFound(path.clone()))?;
    let mime = mime_guess::from_path(&path).first_or_octet_stream();

    Ok((
        [(header::CONTENT_TYPE, mime.as_ref())],
        content.data.into_owned(),
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_offline_manifest_asset_under_static_is_embedded() {
        for path in crate::net::OFFLINE_ASSETS {
            if let Some(name) = path.strip_prefix("/static/") {
                assert!(embedded(name).is_some(), "missing embedded asset {name}");
            }
        }
    }
}
