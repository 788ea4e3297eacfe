use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::template::{NotFoundTemplate, ServerErrorTemplate, render};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("asset not found: {0}")]
    AssetNotFound(String),

    #[error("offline origin '{origin}' is not a valid base URL")]
    Origin {
        origin: String,
        #[source]
        source: url::ParseError,
    },

    #[error("cache error: {0}")]
    Cache(#[from] messboard_offline::CacheError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::AssetNotFound(path) => {
                tracing::debug!(path = %path, "asset not found");
                (StatusCode::NOT_FOUND, render(NotFoundTemplate)).into_response()
            }
            err => {
                tracing::error!(error = %err, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    render(ServerErrorTemplate),
                )
                    .into_response()
            }
        }
    }
}
