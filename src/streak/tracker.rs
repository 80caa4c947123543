//! Streak transition rules and point-in-time status.

use crate::progress::types::StreakState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Point-in-time view of the streak, derived and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSnapshot {
    /// Current consecutive-day count
    pub current_streak: u32,
    /// Whether the streak is still alive (last workout today or yesterday)
    pub is_on_streak: bool,
    /// Whole days left before the streak breaks (0..=2)
    pub days_until_break: u32,
    /// Motivational message matched to the streak length
    pub message: String,
}

/// Computes streak transitions from calendar-day differences.
///
/// The streak counts consecutive calendar days with at least one workout.
/// Same-day entries are deduplicated, a one-day step extends, any larger gap
/// restarts at 1. Backdated entries are accepted into history but never move
/// the streak or its anchor date.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreakTracker;

impl StreakTracker {
    /// Apply a new workout timestamp to the streak record.
    pub fn update(streak: &mut StreakState, timestamp: DateTime<Utc>) {
        let day = timestamp.date_naive();

        match streak.last_workout_date {
            None => {
                streak.days = 1;
                streak.started_on = Some(day);
                streak.last_workout_date = Some(day);
            }
            Some(last) => {
                let diff = (day - last).num_days();
                if diff == 0 {
                    // Second workout of the day, nothing to do
                } else if diff == 1 {
                    streak.days += 1;
                    streak.last_workout_date = Some(day);
                } else if diff > 1 {
                    tracing::info!(gap_days = diff, "Streak broken, restarting at 1");
                    streak.days = 1;
                    streak.started_on = Some(day);
                    streak.last_workout_date = Some(day);
                } else {
                    // Backdated entry: counted in history, ignored for streaks
                    tracing::debug!(days_back = -diff, "Backdated entry ignored for streak");
                }
            }
        }

        if streak.days > streak.longest {
            streak.longest = streak.days;
        }
    }

    /// Derive the current status from the streak record and wall-clock time.
    pub fn status(streak: &StreakState, now: DateTime<Utc>) -> StreakSnapshot {
        let days_since = streak
            .last_workout_date
            .map(|last| (now.date_naive() - last).num_days().max(0))
            .unwrap_or(i64::MAX);

        let is_on_streak = days_since <= 1;
        let days_until_break = (2 - days_since).clamp(0, 2) as u32;

        let message = if !is_on_streak && streak.days > 0 {
            "Your streak is at risk! Get a workout in today to keep it alive.".to_string()
        } else {
            bucket_message(streak.days)
        };

        StreakSnapshot {
            current_streak: streak.days,
            is_on_streak,
            days_until_break,
            message,
        }
    }

    /// Explicitly reset the streak (user action, distinct from a gap break).
    ///
    /// Clears the count and the start marker; the last workout date and the
    /// longest-streak record are preserved, and history is untouched.
    pub fn reset(streak: &mut StreakState) {
        tracing::info!(previous = streak.days, "Streak reset");
        streak.days = 0;
        streak.started_on = None;
    }
}

/// Message for a healthy streak of the given length.
fn bucket_message(days: u32) -> String {
    match days {
        0 => "Start your streak today with a workout!".to_string(),
        1 => "Great start! One day down.".to_string(),
        2 => "Two days in a row. Keep the momentum going!".to_string(),
        3..=6 => format!("{days} days strong. You're building a habit!"),
        7..=13 => format!("{days} days straight. A full week and counting!"),
        _ => format!("{days} days! You're unstoppable."),
    }
}
