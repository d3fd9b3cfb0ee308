use serde::Serialize;

/// Per-habit dashboard summary
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitStats {
    pub habit_id: String,
    pub habit_name: String,
    pub habit_emoji: String,
    pub current_streak: u32,
    pub completion_rate_7d: u32,
}

/// Best current streak across all habits (ties go to first-seen habit)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BestStreak {
    pub streak: u32,
    pub habit_name: String,
    pub habit_emoji: String,
}

/// Full dashboard stats payload
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub stats: Vec<HabitStats>,
    pub best_streak: Option<BestStreak>,
    pub completed_today: usize,
    pub total_habits: usize,
}

/// One column of the week grid
#[derive(Debug, Serialize)]
pub struct WeekDay {
    pub date: String,
    pub label: String,
}

/// One habit row of the week grid; `done` lines up with the `days` columns
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitWeekRow {
    pub habit_id: String,
    pub habit_name: String,
    pub habit_emoji: String,
    pub done: Vec<bool>,
}

/// 7-day-by-habit completion matrix, oldest day first
#[derive(Debug, Serialize)]
pub struct WeekGrid {
    pub days: Vec<WeekDay>,
    pub habits: Vec<HabitWeekRow>,
}
