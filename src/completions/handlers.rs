use super::models::ToggleCompletionRequest;
use super::services::CompletionsService;
use super::validators::ToggleCompletionValidator;
use crate::auth::AuthedUser;
use crate::common::{ApiError, AppState, Validator};
use axum::{
    extract::{Extension, Path},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;

/// POST /api/habits/:id/complete - Toggle a completion mark for one date
pub async fn toggle_completion(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    user: AuthedUser,
    Path(habit_id): Path<String>,
    Json(request): Json<ToggleCompletionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let validation_result = ToggleCompletionValidator.validate(&request);
    if !validation_result.is_valid {
        return Err(ApiError::from(validation_result));
    }

    let app_state = state.read().await;
    let completions_service = CompletionsService::new(app_state.db.clone());

    let result = completions_service
        .toggle_completion(&user.id, &habit_id, &request.date)
        .await?;

    Ok(Json(result))
}
