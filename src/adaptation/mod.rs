//! Per-exercise difficulty adaptation.

pub mod engine;

use serde::{Deserialize, Serialize};

pub use engine::{AdaptiveDifficultyEngine, DEFAULT_REPS};

/// Recommended reps and weight the engine maintains for one exercise.
///
/// `cumulative_progression` is an unbounded trend accumulator: positive when
/// the user keeps outgrowing targets, negative when they keep struggling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExerciseAdaptation {
    /// Recommended rep count, always at least 1
    pub current_reps: u32,
    /// Recommended weight in kilograms, never negative
    pub current_weight: f64,
    /// Signed running sum of per-feedback progression deltas
    pub cumulative_progression: f64,
}

/// Current recommendation for an exercise, as handed to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdaptationTargets {
    /// Recommended reps
    pub reps: u32,
    /// Recommended weight in kilograms
    pub weight: f64,
}
