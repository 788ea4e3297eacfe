use askama::Template;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;

#[derive(askama::Template)]
#[template(path = "manifest.json", escape = "none")]
pub struct ManifestTemplate;

/// Serve the web app manifest uncached so installs pick up changes.
pub async fn asset() -> impl IntoResponse {
    match ManifestTemplate.render() {
        Ok(body) => (
            [
                (header::CONTENT_TYPE, "application/json; charset=utf-8"),
                (header::CACHE_CONTROL, "no-cache, no-store, must-revalidate"),
            ],
            body,
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to render manifest");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
