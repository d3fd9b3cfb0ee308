use super::handlers;
use axum::{routing::post, Router};

/// Creates the completions router
pub fn completions_routes() -> Router {
    Router::new().route(
        "/api/habits/:id/complete",
        post(handlers::toggle_completion),
    )
}
