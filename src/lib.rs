//! messboard - a weekly mess-hall menu board.
//!
//! The root crate composes the domain crates: an axum server hosting the
//! board (page, assets, manifest, probes) and the plumbing the terminal
//! client uses to load the menu through the offline cache.

pub mod config;
pub mod error;
pub mod middleware;
pub mod net;
pub mod observability;
pub mod routes;
pub mod template;

pub use config::Config;
pub use routes::AppState;

/// Create the app router with all routes configured
///
/// Also used by integration tests to exercise the router without binding a
/// listener.
pub fn create_app(config: Config) -> axum::Router {
    routes::router(AppState { config })
}
