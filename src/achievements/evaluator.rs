//! Threshold evaluation over the progress snapshot.

use super::AchievementId;
use crate::progress::types::ProgressState;

/// Derives milestone ids from the aggregate state.
///
/// Pure and stateless: it does not remember what was already shown. Callers
/// that need idempotent delivery (the notification dispatcher) dedupe by id.
#[derive(Debug, Clone, Copy, Default)]
pub struct AchievementEvaluator;

impl AchievementEvaluator {
    /// Evaluate all milestone thresholds against the snapshot.
    pub fn evaluate(state: &ProgressState) -> Vec<AchievementId> {
        let mut unlocked = Vec::new();

        // Streak buckets are mutually exclusive: only the highest matching
        // range is reported.
        match state.streak.days {
            7.. => unlocked.push(AchievementId::Streak7Plus),
            5..=6 => unlocked.push(AchievementId::Streak5),
            3..=4 => unlocked.push(AchievementId::Streak3),
            _ => {}
        }

        let weekly = &state.weekly_progress;
        if weekly.target > 0 && weekly.completed >= weekly.target {
            unlocked.push(AchievementId::WeeklyTargetMet);
        }

        // Lifetime-count milestones fire on exact equality, not on crossing.
        match state.total_workouts {
            10 => unlocked.push(AchievementId::Workouts10),
            25 => unlocked.push(AchievementId::Workouts25),
            50 => unlocked.push(AchievementId::Workouts50),
            100 => unlocked.push(AchievementId::Workouts100),
            _ => {}
        }

        unlocked
    }
}
