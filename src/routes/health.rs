use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use messboard_menu::parse_document;

use crate::config::MENU_VARIANTS;
use crate::routes::assets;

/// GET /health - Liveness probe
/// Returns 200 OK if the process is alive
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// GET /ready - Readiness probe
/// Ready only while every embedded menu variant still parses; a broken
/// document would make the board render its error state for every visitor.
pub async fn ready() -> impl IntoResponse {
    for variant in MENU_VARIANTS {
        let name = format!("menu-{variant}.json");
        let Some(bytes) = assets::embedded(&name) else {
            tracing::error!(asset = %name, "readiness check failed: menu asset missing");
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({"status": "not_ready", "reason": format!("{name} missing")})),
            );
        };
        if let Err(err) = parse_document(&bytes, &name) {
            tracing::error!(asset = %name, error = ?err, "readiness check failed: menu asset unparsable");
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({"status": "not_ready", "reason": format!("{name} unparsable")})),
            );
        }
    }

    (StatusCode::OK, Json(json!({"status": "ready"})))
}
