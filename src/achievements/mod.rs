//! Achievement milestones derived from the progress snapshot.

pub mod evaluator;

use serde::{Deserialize, Serialize};

pub use evaluator::AchievementEvaluator;

/// Stable milestone identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementId {
    /// Streak of 3 or 4 days
    #[serde(rename = "streak_3")]
    Streak3,
    /// Streak of 5 or 6 days
    #[serde(rename = "streak_5")]
    Streak5,
    /// Streak of a week or more
    #[serde(rename = "streak_7_plus")]
    Streak7Plus,
    /// Weekly completion goal reached
    #[serde(rename = "weekly_target_met")]
    WeeklyTargetMet,
    /// Exactly 10 lifetime workouts
    #[serde(rename = "workouts_10")]
    Workouts10,
    /// Exactly 25 lifetime workouts
    #[serde(rename = "workouts_25")]
    Workouts25,
    /// Exactly 50 lifetime workouts
    #[serde(rename = "workouts_50")]
    Workouts50,
    /// Exactly 100 lifetime workouts
    #[serde(rename = "workouts_100")]
    Workouts100,
}

impl AchievementId {
    /// Stable string id, as surfaced to the UI and notification layers.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Streak3 => "streak_3",
            Self::Streak5 => "streak_5",
            Self::Streak7Plus => "streak_7_plus",
            Self::WeeklyTargetMet => "weekly_target_met",
            Self::Workouts10 => "workouts_10",
            Self::Workouts25 => "workouts_25",
            Self::Workouts50 => "workouts_50",
            Self::Workouts100 => "workouts_100",
        }
    }

    /// Display name for notification rendering.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Streak3 => "3-Day Streak",
            Self::Streak5 => "5-Day Streak",
            Self::Streak7Plus => "Week-Long Streak",
            Self::WeeklyTargetMet => "Weekly Goal Crushed",
            Self::Workouts10 => "10 Workouts",
            Self::Workouts25 => "25 Workouts",
            Self::Workouts50 => "50 Workouts",
            Self::Workouts100 => "100 Workouts",
        }
    }
}

impl std::fmt::Display for AchievementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}
