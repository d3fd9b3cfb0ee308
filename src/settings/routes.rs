use super::handlers;
use axum::{routing::patch, Router};

/// Creates the settings router
pub fn settings_routes() -> Router {
    Router::new().route("/api/settings", patch(handlers::update_settings))
}
