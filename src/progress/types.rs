//! Progress aggregate types.

use crate::adaptation::ExerciseAdaptation;
use crate::feedback::types::WorkoutFeedbackEntry;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Completion count against a goal for one rolling period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PeriodProgress {
    /// Workouts completed inside the window
    pub completed: u32,
    /// Goal for the window
    pub target: u32,
}

impl PeriodProgress {
    /// Create progress with a target and zero completions.
    pub fn with_target(target: u32) -> Self {
        Self {
            completed: 0,
            target,
        }
    }

    /// Completion percentage (0..100), capped at 100.
    pub fn percentage(&self) -> f32 {
        if self.target == 0 {
            return if self.completed > 0 { 100.0 } else { 0.0 };
        }
        ((self.completed as f32 / self.target as f32) * 100.0).min(100.0)
    }
}

/// The single authoritative streak record.
///
/// Earlier iterations of the app kept a second streak structure in its own
/// storage slot, which could drift from this one. The engine now owns exactly
/// one; legacy consumers get a read-only [`LegacyStreakRecord`] projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreakState {
    /// Consecutive calendar days with at least one workout
    pub days: u32,
    /// Calendar day of the most recent workout counted toward the streak
    pub last_workout_date: Option<NaiveDate>,
    /// Longest streak ever reached
    pub longest: u32,
    /// Day the current streak started
    pub started_on: Option<NaiveDate>,
}

/// Read-only projection matching the legacy persisted streak shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyStreakRecord {
    pub longest_streak: u32,
    pub weekly_streak_goal: u32,
    pub monthly_streak_goal: u32,
    pub streak_start_date: Option<NaiveDate>,
}

/// Aggregate root for one user's training progress.
///
/// Created lazily with defaults on first load, mutated only through the
/// engine's feedback path, and persisted as one JSON document per user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressState {
    /// Feedback history, newest-first, bounded by the configured cap
    pub history: Vec<WorkoutFeedbackEntry>,
    /// Lifetime workout count (history is capped, so this is tracked separately)
    pub total_workouts: u64,
    /// Authoritative streak record
    pub streak: StreakState,
    /// Completions against the weekly goal
    pub weekly_progress: PeriodProgress,
    /// Completions against the monthly goal
    pub monthly_progress: PeriodProgress,
    /// Per-exercise difficulty adaptations keyed by exercise id
    pub adaptations: HashMap<String, ExerciseAdaptation>,
}

impl ProgressState {
    /// Create an empty state with the given period targets.
    pub fn new(weekly_target: u32, monthly_target: u32) -> Self {
        Self {
            history: Vec::new(),
            total_workouts: 0,
            streak: StreakState::default(),
            weekly_progress: PeriodProgress::with_target(weekly_target),
            monthly_progress: PeriodProgress::with_target(monthly_target),
            adaptations: HashMap::new(),
        }
    }

    /// Project the streak into the legacy persisted shape.
    pub fn legacy_streak_record(
        &self,
        weekly_streak_goal: u32,
        monthly_streak_goal: u32,
    ) -> LegacyStreakRecord {
        LegacyStreakRecord {
            longest_streak: self.streak.longest,
            weekly_streak_goal,
            monthly_streak_goal,
            streak_start_date: self.streak.started_on,
        }
    }
}

impl Default for ProgressState {
    fn default() -> Self {
        Self::new(0, 0)
    }
}
