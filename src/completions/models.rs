use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Completion {
    pub id: String,
    pub habit_id: String,
    pub user_id: String,
    pub completed_date: String, // plain calendar date, "YYYY-MM-DD"
    pub created_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ToggleCompletionRequest {
    pub date: String,
}

#[derive(Debug, Serialize)]
pub struct ToggleCompletionResponse {
    pub completed: bool,
}
