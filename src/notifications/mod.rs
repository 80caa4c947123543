//! Notification facts emitted by the engine.
//!
//! The engine only produces point-in-time facts; scheduling, display
//! preferences, and rendering live in the dispatcher in front of the UI.

pub mod dispatcher;

use crate::achievements::AchievementId;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

pub use dispatcher::{DisplayPreferences, Dispatcher, NotificationSink};

/// Minutes before a scheduled workout that the reminder fires.
pub const PRE_WORKOUT_LEAD_MINUTES: i64 = 30;

/// Kind of notification fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Upcoming workout reminder
    PreWorkout,
    /// Hydration nudge
    Hydration,
    /// Meal timing nudge
    Meal,
    /// Rest-day suggestion
    RestDay,
    /// Streak milestone reached
    StreakMilestone,
    /// Achievement unlocked
    Achievement,
    /// Weekly completion goal reached
    WeeklyTarget,
}

/// A renderable notification fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Fact kind, used by the dispatcher for preference gating
    pub kind: NotificationKind,
    /// Short title
    pub title: String,
    /// Body text
    pub message: String,
    /// Icon name for the UI
    pub icon: String,
}

/// A fact that should be surfaced at a specific wall-clock time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledNotification {
    /// When the dispatcher should fire the notification
    pub fire_at: DateTime<Utc>,
    /// The notification itself
    pub notification: Notification,
}

impl Notification {
    /// Reminder fired ahead of a scheduled workout.
    pub fn pre_workout_reminder(workout_time: DateTime<Utc>) -> ScheduledNotification {
        ScheduledNotification {
            fire_at: workout_time - Duration::minutes(PRE_WORKOUT_LEAD_MINUTES),
            notification: Self {
                kind: NotificationKind::PreWorkout,
                title: "Workout Coming Up".to_string(),
                message: format!(
                    "Your workout starts in {PRE_WORKOUT_LEAD_MINUTES} minutes. Time to get ready!"
                ),
                icon: "dumbbell".to_string(),
            },
        }
    }

    /// On-demand hydration nudge.
    pub fn hydration_reminder() -> Self {
        Self {
            kind: NotificationKind::Hydration,
            title: "Stay Hydrated".to_string(),
            message: "Drink a glass of water to keep your training on track.".to_string(),
            icon: "droplet".to_string(),
        }
    }

    /// On-demand meal nudge.
    pub fn meal_reminder() -> Self {
        Self {
            kind: NotificationKind::Meal,
            title: "Fuel Up".to_string(),
            message: "A balanced meal now will power your next session.".to_string(),
            icon: "meal".to_string(),
        }
    }

    /// On-demand rest-day suggestion.
    pub fn rest_day_reminder() -> Self {
        Self {
            kind: NotificationKind::RestDay,
            title: "Rest Day".to_string(),
            message: "Recovery is training too. Take it easy today.".to_string(),
            icon: "moon".to_string(),
        }
    }

    /// Streak milestone fact, if the streak length is a milestone.
    ///
    /// Milestones fire at 3, 5, and 7 days, then at every further multiple
    /// of 7.
    pub fn streak_milestone(days: u32) -> Option<Self> {
        let is_milestone = matches!(days, 3 | 5 | 7) || (days > 7 && days % 7 == 0);
        if !is_milestone {
            return None;
        }

        Some(Self {
            kind: NotificationKind::StreakMilestone,
            title: format!("{days}-Day Streak!"),
            message: format!("You've worked out {days} days in a row. Keep it going!"),
            icon: "flame".to_string(),
        })
    }

    /// Achievement unlocked fact.
    pub fn achievement_unlocked(id: AchievementId) -> Self {
        Self {
            kind: NotificationKind::Achievement,
            title: "Achievement Unlocked".to_string(),
            message: id.title().to_string(),
            icon: format!("achievement_{id}"),
        }
    }

    /// Weekly goal reached fact.
    pub fn weekly_target_met(completed: u32, target: u32) -> Self {
        Self {
            kind: NotificationKind::WeeklyTarget,
            title: "Weekly Goal Met".to_string(),
            message: format!("{completed} of {target} workouts done this week. Goal reached!"),
            icon: "trophy".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_pre_workout_fires_thirty_minutes_early() {
        let workout_time = Utc.with_ymd_and_hms(2024, 3, 1, 18, 0, 0).unwrap();
        let scheduled = Notification::pre_workout_reminder(workout_time);
        assert_eq!(
            scheduled.fire_at,
            Utc.with_ymd_and_hms(2024, 3, 1, 17, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_streak_milestones() {
        for days in [3, 5, 7, 14, 21, 70] {
            assert!(Notification::streak_milestone(days).is_some(), "{days}");
        }
        for days in [0, 1, 2, 4, 6, 8, 10, 13] {
            assert!(Notification::streak_milestone(days).is_none(), "{days}");
        }
    }
}
