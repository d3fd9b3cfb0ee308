use super::models::{CreateHabitRequest, Habit, UpdateHabitRequest};
use super::validators::HabitValidator;
use crate::common::{generate_habit_id, ApiError, Validator};
use sqlx::SqlitePool;
use tracing::info;

pub struct HabitsService {
    db: SqlitePool,
}

impl HabitsService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    // ============================================================================
    // Habit CRUD Operations
    // ============================================================================

    /// Get all active (non-archived) habits for a user, oldest first
    pub async fn get_active_habits(&self, user_id: &str) -> Result<Vec<Habit>, ApiError> {
        let habits = sqlx::query_as::<_, Habit>(
            r#"
            SELECT id, user_id, name, emoji, frequency, is_archived, created_at, updated_at
            FROM habits
            WHERE user_id = ? AND is_archived = 0
            ORDER BY created_at ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(habits)
    }

    /// Get a habit by ID, scoped to its owner
    ///
    /// Ownership is part of the lookup: another user's habit ID behaves
    /// exactly like a missing one.
    pub async fn get_habit_by_id(&self, user_id: &str, habit_id: &str) -> Result<Habit, ApiError> {
        let habit = sqlx::query_as::<_, Habit>(
            r#"
            SELECT id, user_id, name, emoji, frequency, is_archived, created_at, updated_at
            FROM habits
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(habit_id)
        .bind(user_id)
        .fetch_optional(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?
        .ok_or_else(|| ApiError::NotFound("Habit not found".to_string()))?;

        Ok(habit)
    }

    /// Create a new habit
    pub async fn create_habit(
        &self,
        user_id: &str,
        request: CreateHabitRequest,
    ) -> Result<Habit, ApiError> {
        let validation_result = HabitValidator.validate(&request);
        if !validation_result.is_valid {
            return Err(ApiError::from(validation_result));
        }

        let habit_id = generate_habit_id();
        let emoji = request.emoji.unwrap_or_else(|| "✅".to_string());
        let frequency = request.frequency.unwrap_or_else(|| "daily".to_string());
        let now = chrono::Utc::now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO habits (id, user_id, name, emoji, frequency, is_archived, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, 0, ?, ?)
            "#,
        )
        .bind(&habit_id)
        .bind(user_id)
        .bind(&request.name)
        .bind(&emoji)
        .bind(&frequency)
        .bind(&now)
        .bind(&now)
        .execute(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        info!(
            habit_id = %habit_id,
            user_id = %user_id,
            "Created habit: {}",
            request.name
        );

        self.get_habit_by_id(user_id, &habit_id).await
    }

    /// Update an existing habit (partial: name, emoji, frequency)
    pub async fn update_habit(
        &self,
        user_id: &str,
        habit_id: &str,
        request: UpdateHabitRequest,
    ) -> Result<Habit, ApiError> {
        // Ownership check doubles as the existence check
        self.get_habit_by_id(user_id, habit_id).await?;

        let validation_result = HabitValidator.validate(&request);
        if !validation_result.is_valid {
            return Err(ApiError::from(validation_result));
        }

        let now = chrono::Utc::now().to_rfc3339();

        let mut updates = Vec::new();
        let mut params: Vec<String> = Vec::new();

        if let Some(name) = &request.name {
            updates.push("name = ?");
            params.push(name.clone());
        }

        if let Some(emoji) = &request.emoji {
            updates.push("emoji = ?");
            params.push(emoji.clone());
        }

        if let Some(frequency) = &request.frequency {
            updates.push("frequency = ?");
            params.push(frequency.clone());
        }

        if !updates.is_empty() {
            updates.push("updated_at = ?");
            params.push(now);
            params.push(habit_id.to_string());
            params.push(user_id.to_string());

            let query_str = format!(
                "UPDATE habits SET {} WHERE id = ? AND user_id = ?",
                updates.join(", ")
            );

            let mut query_builder = sqlx::query(&query_str);
            for param in params {
                query_builder = query_builder.bind(param);
            }

            query_builder
                .execute(&self.db)
                .await
                .map_err(ApiError::DatabaseError)?;

            info!(habit_id = %habit_id, user_id = %user_id, "Updated habit");
        }

        self.get_habit_by_id(user_id, habit_id).await
    }

    /// Archive a habit (soft delete, one-way)
    ///
    /// Completions are kept so historical statistics stay valid.
    pub async fn archive_habit(&self, user_id: &str, habit_id: &str) -> Result<(), ApiError> {
        self.get_habit_by_id(user_id, habit_id).await?;

        let now = chrono::Utc::now().to_rfc3339();

        sqlx::query("UPDATE habits SET is_archived = 1, updated_at = ? WHERE id = ? AND user_id = ?")
            .bind(&now)
            .bind(habit_id)
            .bind(user_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        info!(habit_id = %habit_id, user_id = %user_id, "Archived habit");

        Ok(())
    }
}
