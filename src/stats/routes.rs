use super::handlers;
use axum::{routing::get, Router};

/// Creates the stats router
pub fn stats_routes() -> Router {
    Router::new()
        .route("/api/stats", get(handlers::get_dashboard_stats))
        .route("/api/stats/week", get(handlers::get_week_grid))
}
