use super::services::StatsService;
use crate::auth::AuthedUser;
use crate::common::{ApiError, AppState};
use axum::{extract::Extension, response::IntoResponse, Json};
use std::sync::Arc;
use tokio::sync::RwLock;

/// GET /api/stats - Per-habit dashboard statistics
///
/// "today" is resolved once here from the process-local clock and threaded
/// through every computation in the request, so the streak, rate, and
/// completed-today figures all agree on what day it is.
pub async fn get_dashboard_stats(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    user: AuthedUser,
) -> Result<impl IntoResponse, ApiError> {
    let today = chrono::Local::now().date_naive();

    let app_state = state.read().await;
    let stats_service = StatsService::new(app_state.db.clone());

    let stats = stats_service.dashboard_stats(&user.id, today).await?;

    Ok(Json(stats))
}

/// GET /api/stats/week - Last-7-days completion grid
pub async fn get_week_grid(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    user: AuthedUser,
) -> Result<impl IntoResponse, ApiError> {
    let today = chrono::Local::now().date_naive();

    let app_state = state.read().await;
    let stats_service = StatsService::new(app_state.db.clone());

    let grid = stats_service.week_grid(&user.id, today).await?;

    Ok(Json(grid))
}
