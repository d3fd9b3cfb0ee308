use super::models::{Completion, ToggleCompletionResponse};
use crate::common::{generate_completion_id, ApiError};
use crate::habits::services::HabitsService;
use sqlx::SqlitePool;
use tracing::info;

pub struct CompletionsService {
    db: SqlitePool,
}

impl CompletionsService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    // ============================================================================
    // Toggle Protocol
    // ============================================================================

    /// Toggle the completion mark for (habit, date)
    ///
    /// The toggle is a delete-else-insert against the unique index on
    /// (habit_id, completed_date) rather than a read-check-then-act sequence:
    /// the delete either removes the mark (-> completed = false) or proves it
    /// was absent, in which case INSERT OR IGNORE places it. A racing insert
    /// losing to the index is benign - the mark exists either way, so the
    /// result still reports completed = true.
    pub async fn toggle_completion(
        &self,
        user_id: &str,
        habit_id: &str,
        date: &str,
    ) -> Result<ToggleCompletionResponse, ApiError> {
        // Habit must exist and belong to the caller
        let habits_service = HabitsService::new(self.db.clone());
        habits_service.get_habit_by_id(user_id, habit_id).await?;

        let deleted = sqlx::query("DELETE FROM completions WHERE habit_id = ? AND completed_date = ?")
            .bind(habit_id)
            .bind(date)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        if deleted.rows_affected() > 0 {
            info!(
                habit_id = %habit_id,
                user_id = %user_id,
                date = %date,
                "Completion unmarked"
            );
            return Ok(ToggleCompletionResponse { completed: false });
        }

        let completion_id = generate_completion_id();
        let now = chrono::Utc::now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT OR IGNORE INTO completions (id, habit_id, user_id, completed_date, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&completion_id)
        .bind(habit_id)
        .bind(user_id)
        .bind(date)
        .bind(&now)
        .execute(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        info!(
            habit_id = %habit_id,
            user_id = %user_id,
            date = %date,
            "Completion marked"
        );

        Ok(ToggleCompletionResponse { completed: true })
    }

    // ============================================================================
    // Completion Queries
    // ============================================================================

    /// All completion dates for one habit, ascending
    pub async fn dates_for_habit(
        &self,
        user_id: &str,
        habit_id: &str,
    ) -> Result<Vec<String>, ApiError> {
        let rows: Vec<(String,)> = sqlx::query_as(
            r#"
            SELECT completed_date
            FROM completions
            WHERE user_id = ? AND habit_id = ?
            ORDER BY completed_date ASC
            "#,
        )
        .bind(user_id)
        .bind(habit_id)
        .fetch_all(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(rows.into_iter().map(|(date,)| date).collect())
    }

    /// All of a user's completions inside an inclusive date window
    pub async fn completions_in_range(
        &self,
        user_id: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<Completion>, ApiError> {
        let completions = sqlx::query_as::<_, Completion>(
            r#"
            SELECT id, habit_id, user_id, completed_date, created_at
            FROM completions
            WHERE user_id = ? AND completed_date >= ? AND completed_date <= ?
            ORDER BY completed_date ASC
            "#,
        )
        .bind(user_id)
        .bind(start_date)
        .bind(end_date)
        .fetch_all(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(completions)
    }
}
