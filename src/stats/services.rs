use super::engine;
use super::models::{BestStreak, DashboardStats, HabitStats, HabitWeekRow, WeekDay, WeekGrid};
use crate::common::ApiError;
use crate::completions::services::CompletionsService;
use crate::habits::services::HabitsService;
use chrono::{Days, NaiveDate};
use futures::future;
use sqlx::SqlitePool;
use std::collections::HashSet;
use tracing::warn;

/// Dashboard aggregator: fans out per-habit engine computations and
/// assembles the summary list, best-streak reduction, and week grid.
pub struct StatsService {
    db: SqlitePool,
}

impl StatsService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Per-habit summaries for the user's active habits
    ///
    /// Each habit's computation is independent and read-only, so they run
    /// concurrently. "today" arrives from the handler so every habit in one
    /// dashboard render sees the same calendar day.
    pub async fn dashboard_stats(
        &self,
        user_id: &str,
        today: NaiveDate,
    ) -> Result<DashboardStats, ApiError> {
        let habits_service = HabitsService::new(self.db.clone());
        let habits = habits_service.get_active_habits(user_id).await?;
        let total_habits = habits.len();

        let tasks = habits.into_iter().map(|habit| {
            let completions_service = CompletionsService::new(self.db.clone());
            let user_id = user_id.to_string();

            async move {
                let raw_dates = completions_service
                    .dates_for_habit(&user_id, &habit.id)
                    .await?;
                let dates = parse_stored_dates(&habit.id, &raw_dates);
                let date_set: HashSet<NaiveDate> = dates.iter().copied().collect();

                Ok::<HabitStats, ApiError>(HabitStats {
                    habit_id: habit.id,
                    habit_name: habit.name,
                    habit_emoji: habit.emoji,
                    current_streak: engine::current_streak(&date_set, today),
                    completion_rate_7d: engine::completion_rate(&dates, today, 7),
                })
            }
        });

        let results = future::join_all(tasks).await;

        let mut stats = Vec::with_capacity(total_habits);
        for result in results {
            stats.push(result?);
        }

        // Best-streak reduction: strict > keeps the first-seen habit on ties
        let mut best_streak: Option<BestStreak> = None;
        for s in &stats {
            if s.current_streak == 0 {
                continue;
            }
            let beats = best_streak
                .as_ref()
                .map_or(true, |b| s.current_streak > b.streak);
            if beats {
                best_streak = Some(BestStreak {
                    streak: s.current_streak,
                    habit_name: s.habit_name.clone(),
                    habit_emoji: s.habit_emoji.clone(),
                });
            }
        }

        let completed_today = self.completed_today_count(user_id, today, &stats).await?;

        Ok(DashboardStats {
            stats,
            best_streak,
            completed_today,
            total_habits,
        })
    }

    /// 7-day-by-habit completion matrix, oldest day first
    ///
    /// Pure membership test against the window's completion set - the streak
    /// engine plays no part here.
    pub async fn week_grid(&self, user_id: &str, today: NaiveDate) -> Result<WeekGrid, ApiError> {
        let habits_service = HabitsService::new(self.db.clone());
        let completions_service = CompletionsService::new(self.db.clone());

        let habits = habits_service.get_active_habits(user_id).await?;

        let days: Vec<WeekDay> = last_n_days(today, 7)
            .into_iter()
            .map(|date| WeekDay {
                date: date.format("%Y-%m-%d").to_string(),
                label: date.format("%a").to_string(),
            })
            .collect();

        let window_start = &days[0].date;
        let window_end = &days[days.len() - 1].date;

        let completions = completions_service
            .completions_in_range(user_id, window_start, window_end)
            .await?;

        let done_set: HashSet<(String, String)> = completions
            .into_iter()
            .map(|c| (c.habit_id, c.completed_date))
            .collect();

        let habit_rows = habits
            .into_iter()
            .map(|habit| {
                let done = days
                    .iter()
                    .map(|day| done_set.contains(&(habit.id.clone(), day.date.clone())))
                    .collect();

                HabitWeekRow {
                    habit_id: habit.id,
                    habit_name: habit.name,
                    habit_emoji: habit.emoji,
                    done,
                }
            })
            .collect();

        Ok(WeekGrid {
            days,
            habits: habit_rows,
        })
    }

    /// How many of the user's active habits are marked done today
    async fn completed_today_count(
        &self,
        user_id: &str,
        today: NaiveDate,
        stats: &[HabitStats],
    ) -> Result<usize, ApiError> {
        let completions_service = CompletionsService::new(self.db.clone());
        let today_str = today.format("%Y-%m-%d").to_string();

        let todays = completions_service
            .completions_in_range(user_id, &today_str, &today_str)
            .await?;

        let done_today: HashSet<String> = todays.into_iter().map(|c| c.habit_id).collect();

        // Count against active habits only; completions on archived habits
        // still exist but don't show on the dashboard
        Ok(stats
            .iter()
            .filter(|s| done_today.contains(&s.habit_id))
            .count())
    }
}

/// Parse stored YYYY-MM-DD strings, skipping anything unparseable
///
/// The store only ever receives validated dates, so a parse failure here
/// means a hand-edited row; it is logged and excluded rather than poisoning
/// the whole dashboard.
fn parse_stored_dates(habit_id: &str, raw_dates: &[String]) -> Vec<NaiveDate> {
    raw_dates
        .iter()
        .filter_map(|raw| match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(e) => {
                warn!(
                    habit_id = %habit_id,
                    date = %raw,
                    error = %e,
                    "Skipping unparseable completion date"
                );
                None
            }
        })
        .collect()
}

/// The last `n` calendar days ending at `today`, oldest first
fn last_n_days(today: NaiveDate, n: u64) -> Vec<NaiveDate> {
    (0..n)
        .rev()
        .map(|offset| {
            today
                .checked_sub_days(Days::new(offset))
                .unwrap_or(NaiveDate::MIN)
        })
        .collect()
}
