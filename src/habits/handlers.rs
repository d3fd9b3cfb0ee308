use super::models::{CreateHabitRequest, SuccessResponse, UpdateHabitRequest};
use super::services::HabitsService;
use crate::auth::AuthedUser;
use crate::common::{ApiError, AppState};
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;

// ============================================================================
// Habit CRUD Handlers
// ============================================================================

/// GET /api/habits - List the caller's active habits
pub async fn get_habits(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    user: AuthedUser,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let habits_service = HabitsService::new(app_state.db.clone());

    let habits = habits_service.get_active_habits(&user.id).await?;

    Ok(Json(serde_json::json!({ "habits": habits })))
}

/// POST /api/habits - Create a new habit
pub async fn create_habit(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    user: AuthedUser,
    Json(request): Json<CreateHabitRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let habits_service = HabitsService::new(app_state.db.clone());

    let habit = habits_service.create_habit(&user.id, request).await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "habit": habit })),
    ))
}

/// PUT /api/habits/:id - Update a habit
pub async fn update_habit(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    user: AuthedUser,
    Path(habit_id): Path<String>,
    Json(request): Json<UpdateHabitRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let habits_service = HabitsService::new(app_state.db.clone());

    let habit = habits_service
        .update_habit(&user.id, &habit_id, request)
        .await?;

    Ok(Json(serde_json::json!({ "habit": habit })))
}

/// DELETE /api/habits/:id - Archive a habit (soft delete)
pub async fn archive_habit(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    user: AuthedUser,
    Path(habit_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let habits_service = HabitsService::new(app_state.db.clone());

    habits_service.archive_habit(&user.id, &habit_id).await?;

    Ok(Json(SuccessResponse { success: true }))
}
