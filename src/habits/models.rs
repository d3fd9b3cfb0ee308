use serde::{Deserialize, Serialize};
use sqlx::FromRow;

fn deserialize_bool_from_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: i64 = Deserialize::deserialize(deserializer)?;
    Ok(value)
}

fn serialize_bool_to_bool<S>(value: &i64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_bool(*value != 0)
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Habit {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub emoji: String,
    pub frequency: String, // 'daily' or 'weekly'
    #[serde(deserialize_with = "deserialize_bool_from_int")]
    #[serde(serialize_with = "serialize_bool_to_bool")]
    pub is_archived: i64,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateHabitRequest {
    pub name: String,
    pub emoji: Option<String>,
    pub frequency: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateHabitRequest {
    pub name: Option<String>,
    pub emoji: Option<String>,
    pub frequency: Option<String>,
}

#[derive(Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}
