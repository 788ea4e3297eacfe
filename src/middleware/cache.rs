use axum::{
    body::Body,
    http::{Request, Response, header},
    middleware::Next,
};

/// Middleware to set cache control headers
/// - Static files: cache hard, they never change within a deployed version
/// - Everything else: revalidate every time
///
/// Handlers that set their own Cache-Control are left alone.
pub async fn cache_control_middleware(req: Request<Body>, next: Next) -> Response<Body> {
    let is_static_file = req.uri().path().starts_with("/static/");
    let mut response = next.run(req).await;

    if response.headers().contains_key(header::CACHE_CONTROL) {
        return response;
    }

    let value = if is_static_file {
        "public, max-age=31536000, immutable"
    } else {
        "no-store, no-cache, must-revalidate"
    };

    if let Ok(value) = value.parse() {
        response.headers_mut().insert(header::CACHE_CONTROL, value);
    }

    response
}
