// src/stats/engine.rs
//! Streak and completion-rate computation engine
//!
//! Pure functions over a single habit's completion dates. "Today" is always
//! an explicit parameter supplied by the caller - the engine never touches
//! the clock, so the same request renders every statistic against one
//! consistent calendar day and the functions stay trivially testable.
//!
//! All three operations are total: defined for the empty set, for dates at
//! the calendar bounds, and for a zero-day window.

use chrono::{Days, NaiveDate};
use std::collections::HashSet;

/// Number of consecutive completed days ending at today or yesterday
///
/// The streak is alive only while today or yesterday is marked complete.
/// A user who finished yesterday but hasn't checked in yet today keeps
/// their streak; a gap of a full day resets it to 0 no matter how long the
/// historical run was.
pub fn current_streak(dates: &HashSet<NaiveDate>, today: NaiveDate) -> u32 {
    // Pick the walk's starting day: today if complete, else yesterday
    let start = if dates.contains(&today) {
        today
    } else {
        match today.pred_opt() {
            Some(yesterday) if dates.contains(&yesterday) => yesterday,
            _ => return 0,
        }
    };

    let mut streak = 0;
    let mut cursor = start;
    loop {
        if !dates.contains(&cursor) {
            break;
        }
        streak += 1;
        cursor = match cursor.pred_opt() {
            Some(prev) => prev,
            None => break, // ran off the calendar
        };
    }

    streak
}

/// Maximum-length run of consecutive completed days anywhere in history
///
/// Unlike [`current_streak`] this ignores "today" entirely - it is a
/// historical maximum, not a live counter. A single completion counts as a
/// run of 1.
pub fn longest_streak(dates: &[NaiveDate]) -> u32 {
    if dates.is_empty() {
        return 0;
    }

    let mut sorted: Vec<NaiveDate> = dates.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut longest = 1;
    let mut run = 1;

    for pair in sorted.windows(2) {
        if pair[1].signed_duration_since(pair[0]).num_days() == 1 {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 1;
        }
    }

    longest
}

/// Percentage of the last `window_days` calendar days with a completion
///
/// The window is `[today - (window_days - 1), today]` inclusive. Dates
/// outside the window are ignored, duplicates inside it count once, and the
/// result is rounded half-up to a whole percentage. A zero-day window yields
/// 0 rather than a division error.
pub fn completion_rate(dates: &[NaiveDate], today: NaiveDate, window_days: u32) -> u32 {
    if window_days == 0 {
        return 0;
    }

    let window_start = today
        .checked_sub_days(Days::new(u64::from(window_days) - 1))
        .unwrap_or(NaiveDate::MIN);

    let in_window: HashSet<NaiveDate> = dates
        .iter()
        .filter(|d| **d >= window_start && **d <= today)
        .copied()
        .collect();

    ((in_window.len() as f64 / f64::from(window_days)) * 100.0).round() as u32
}
