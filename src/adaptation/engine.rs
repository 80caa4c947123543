//! Difficulty-driven reps/weight adjustment rules.

use super::{AdaptationTargets, ExerciseAdaptation};
use crate::feedback::types::{Difficulty, WorkoutFeedbackEntry};
use std::collections::HashMap;

/// Default rep recommendation before any feedback exists.
pub const DEFAULT_REPS: u32 = 10;

/// Applies qualitative feedback to per-exercise recommendations.
///
/// Adjustments are computed from the entry's own prescribed targets, not from
/// the running recommendation: resubmitting the same nominal targets does not
/// compound reps or weight across calls. Only `cumulative_progression`
/// compounds.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdaptiveDifficultyEngine;

impl AdaptiveDifficultyEngine {
    /// Update (or initialize) the adaptation for the entry's exercise.
    ///
    /// No-op when the entry carries no `exercise_id`.
    pub fn adapt(
        adaptations: &mut HashMap<String, ExerciseAdaptation>,
        entry: &WorkoutFeedbackEntry,
    ) {
        let Some(exercise_id) = entry.exercise_id.as_deref() else {
            return;
        };

        let adaptation = adaptations
            .entry(exercise_id.to_string())
            .or_insert_with(|| ExerciseAdaptation {
                current_reps: entry.target_reps.unwrap_or(DEFAULT_REPS).max(1),
                current_weight: entry.target_weight.unwrap_or(0.0).max(0.0),
                cumulative_progression: 0.0,
            });

        if let Some(reps) = entry.target_reps {
            adaptation.current_reps = adjust_reps(reps, entry.difficulty);
        }

        if let Some(weight) = entry.target_weight {
            if weight > 0.0 {
                adaptation.current_weight = adjust_weight(weight, entry.difficulty);
            }
        }

        adaptation.cumulative_progression += progression_delta(entry.difficulty);

        tracing::debug!(
            exercise_id,
            reps = adaptation.current_reps,
            weight = adaptation.current_weight,
            progression = adaptation.cumulative_progression,
            "Adaptation updated"
        );
    }

    /// Current recommendation for an exercise, defaulting to 10 reps at
    /// bodyweight if no feedback was ever recorded for it.
    pub fn targets(
        adaptations: &HashMap<String, ExerciseAdaptation>,
        exercise_id: &str,
    ) -> AdaptationTargets {
        adaptations
            .get(exercise_id)
            .map(|a| AdaptationTargets {
                reps: a.current_reps,
                weight: a.current_weight,
            })
            .unwrap_or(AdaptationTargets {
                reps: DEFAULT_REPS,
                weight: 0.0,
            })
    }
}

/// Snap a percentage product to its intended value before rounding.
///
/// The factors are binary-inexact: `50.0 * 1.10` is `55.000000000000007` in
/// f64, and ceiling that raw product lands on 56 instead of 55. Same hazard
/// for `floor` in the other direction.
fn snap(x: f64) -> f64 {
    (x * 1e9).round() / 1e9
}

/// New rep recommendation from the prescribed reps and the rating.
fn adjust_reps(target_reps: u32, difficulty: Difficulty) -> u32 {
    let reps = f64::from(target_reps);
    match difficulty {
        Difficulty::TooEasy => snap(reps * 1.15).ceil() as u32,
        Difficulty::Perfect => snap(reps * 1.05).ceil() as u32,
        Difficulty::TooHard => (snap(reps * 0.85).floor() as u32).max(1),
    }
}

/// New weight recommendation from the prescribed weight and the rating.
fn adjust_weight(target_weight: f64, difficulty: Difficulty) -> f64 {
    match difficulty {
        Difficulty::TooEasy => snap(target_weight * 1.10).ceil(),
        Difficulty::Perfect => snap(target_weight * 1.05).ceil(),
        Difficulty::TooHard => snap(target_weight * 0.90).floor().max(0.0),
    }
}

/// Signed progression contribution of one feedback entry.
fn progression_delta(difficulty: Difficulty) -> f64 {
    match difficulty {
        Difficulty::TooEasy => 0.15,
        Difficulty::Perfect => 0.05,
        Difficulty::TooHard => -0.20,
    }
}
