use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Router, middleware as axum_middleware};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::middleware::cache_control_middleware;
use crate::template::{NotFoundTemplate, render};

pub mod assets;
pub mod health;
pub mod manifest;
pub mod menu;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}

pub async fn fallback() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, render(NotFoundTemplate))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/", get(menu::page))
        .route("/manifest.json", get(manifest::asset))
        .route("/static/{*path}", get(assets::serve))
        .fallback(fallback)
        .with_state(state)
        .layer(axum_middleware::from_fn(cache_control_middleware))
        .layer(TraceLayer::new_for_http())
}
