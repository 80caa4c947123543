//! Engine facade tying feedback, streaks, aggregation, and adaptation
//! together over an injected persistence store.

use crate::achievements::{AchievementEvaluator, AchievementId};
use crate::adaptation::{AdaptationTargets, AdaptiveDifficultyEngine};
use crate::feedback::log::FeedbackLog;
use crate::feedback::types::{FeedbackError, WorkoutFeedbackEntry};
use crate::progress::aggregator::PeriodAggregator;
use crate::progress::types::{LegacyStreakRecord, ProgressState};
use crate::storage::config::EngineConfig;
use crate::storage::store::{ProgressStore, StorageError};
use crate::streak::tracker::{StreakSnapshot, StreakTracker};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Weekly completion summary handed to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeeklyProgressSummary {
    /// Workouts completed this week
    pub completed: u32,
    /// Weekly goal
    pub target: u32,
    /// Completion percentage (0..100)
    pub percentage: f32,
}

/// Engine errors.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Feedback(#[from] FeedbackError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Adaptive training progress engine for one user.
///
/// Single-writer and synchronous: every mutation is a load-once,
/// mutate-in-memory, save cycle. The store races last-write-wins, so callers
/// keep at most one mutation in flight per user. A failed save surfaces as
/// [`EngineError::Storage`] and leaves the in-memory state unchanged.
pub struct ProgressEngine<S: ProgressStore> {
    user_id: Uuid,
    config: EngineConfig,
    store: S,
    log: FeedbackLog,
    state: ProgressState,
}

impl<S: ProgressStore> ProgressEngine<S> {
    /// Open the engine for a user, lazily creating default state on first use.
    pub fn open(user_id: Uuid, config: EngineConfig, store: S) -> Result<Self, EngineError> {
        let state = store.load(user_id)?.unwrap_or_else(|| {
            tracing::info!(user_id = %user_id, "No stored progress, starting fresh");
            ProgressState::new(config.weekly_workout_target, config.monthly_workout_target)
        });

        Ok(Self {
            user_id,
            log: FeedbackLog::with_cap(config.history_cap),
            config,
            store,
            state,
        })
    }

    /// Record one workout feedback entry and persist the updated state.
    pub fn record_feedback(
        &mut self,
        entry: WorkoutFeedbackEntry,
    ) -> Result<&ProgressState, EngineError> {
        self.record_feedback_at(entry, Utc::now())
    }

    /// Record feedback with an explicit aggregation reference time.
    ///
    /// The entry's own timestamp drives streak transitions; `now` anchors the
    /// weekly and monthly windows.
    pub fn record_feedback_at(
        &mut self,
        entry: WorkoutFeedbackEntry,
        now: DateTime<Utc>,
    ) -> Result<&ProgressState, EngineError> {
        let mut next = self.state.clone();

        self.log.record(&mut next.history, entry.clone())?;
        next.total_workouts += 1;

        StreakTracker::update(&mut next.streak, entry.timestamp);
        PeriodAggregator::recompute(&mut next, now);
        AdaptiveDifficultyEngine::adapt(&mut next.adaptations, &entry);

        self.store.save(self.user_id, &next)?;
        self.state = next;

        tracing::info!(
            user_id = %self.user_id,
            workout_id = %entry.workout_id,
            streak = self.state.streak.days,
            total = self.state.total_workouts,
            "Feedback recorded"
        );

        Ok(&self.state)
    }

    /// Current reps/weight recommendation for an exercise.
    pub fn get_adaptation(&self, exercise_id: &str) -> AdaptationTargets {
        AdaptiveDifficultyEngine::targets(&self.state.adaptations, exercise_id)
    }

    /// Streak status at the given wall-clock time.
    pub fn get_streak_status(&self, now: DateTime<Utc>) -> StreakSnapshot {
        StreakTracker::status(&self.state.streak, now)
    }

    /// Weekly completion summary.
    pub fn get_weekly_progress(&self) -> WeeklyProgressSummary {
        let weekly = self.state.weekly_progress;
        WeeklyProgressSummary {
            completed: weekly.completed,
            target: weekly.target,
            percentage: weekly.percentage(),
        }
    }

    /// Milestone ids matching the current snapshot.
    ///
    /// Streak buckets read the unified streak record, so they become visible
    /// the moment the streak enters a bucket (a 3-day streak reports
    /// `streak_3` right away). Older builds kept a second, separately
    /// persisted streak count whose drift could hide these until later.
    pub fn check_achievements(&self) -> Vec<AchievementId> {
        AchievementEvaluator::evaluate(&self.state)
    }

    /// Explicitly reset the streak and persist. History is untouched.
    pub fn reset_streak(&mut self) -> Result<&ProgressState, EngineError> {
        let mut next = self.state.clone();
        StreakTracker::reset(&mut next.streak);

        self.store.save(self.user_id, &next)?;
        self.state = next;

        Ok(&self.state)
    }

    /// Read-only view of the aggregate state.
    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    /// Legacy-shaped streak projection for older consumers.
    pub fn legacy_streak_record(&self) -> LegacyStreakRecord {
        self.state.legacy_streak_record(
            self.config.weekly_streak_goal,
            self.config.monthly_streak_goal,
        )
    }
}
