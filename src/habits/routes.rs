use super::handlers;
use axum::{
    routing::{get, put},
    Router,
};

/// Creates the habits router with all habit CRUD routes
pub fn habits_routes() -> Router {
    Router::new()
        .route(
            "/api/habits",
            get(handlers::get_habits).post(handlers::create_habit),
        )
        .route(
            "/api/habits/:id",
            put(handlers::update_habit).delete(handlers::archive_habit),
        )
}
