use super::models::UpdateSettingsRequest;
use super::validators::SettingsValidator;
use crate::auth::AuthedUser;
use crate::common::{ApiError, AppState, Validator};
use axum::{extract::Extension, response::IntoResponse, Json};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// PATCH /api/settings - Update the caller's display name
pub async fn update_settings(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    user: AuthedUser,
    Json(request): Json<UpdateSettingsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let validation_result = SettingsValidator.validate(&request);
    if !validation_result.is_valid {
        return Err(ApiError::from(validation_result));
    }

    let app_state = state.read().await;

    sqlx::query("UPDATE users SET name = ? WHERE id = ?")
        .bind(&request.name)
        .bind(&user.id)
        .execute(&app_state.db)
        .await
        .map_err(ApiError::DatabaseError)?;

    info!(user_id = %user.id, "Updated display name");

    Ok(Json(serde_json::json!({ "success": true })))
}
