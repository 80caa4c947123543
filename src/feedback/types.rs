//! Feedback entry types and validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Qualitative difficulty rating for a completed workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    /// Workout felt too easy; targets should increase
    TooEasy,
    /// Workout was at the right level
    Perfect,
    /// Workout felt too hard; targets should decrease
    TooHard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::TooEasy => write!(f, "too-easy"),
            Difficulty::Perfect => write!(f, "perfect"),
            Difficulty::TooHard => write!(f, "too-hard"),
        }
    }
}

/// A single post-workout feedback record.
///
/// Immutable once recorded: the engine never edits entries in place, it only
/// prepends new ones and evicts the oldest past the history cap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutFeedbackEntry {
    /// Workout this feedback refers to
    pub workout_id: Uuid,
    /// Qualitative difficulty rating
    pub difficulty: Difficulty,
    /// Optional free-form comment
    pub feedback_text: Option<String>,
    /// Reps actually completed (if the workout tracked reps)
    pub completed_reps: Option<u32>,
    /// Reps prescribed for the workout
    pub target_reps: Option<u32>,
    /// Weight actually used in kilograms
    pub weight_used: Option<f64>,
    /// Weight prescribed in kilograms
    pub target_weight: Option<f64>,
    /// Exercise this feedback adapts (absent for whole-workout feedback)
    pub exercise_id: Option<String>,
    /// When the workout was completed
    pub timestamp: DateTime<Utc>,
}

impl WorkoutFeedbackEntry {
    /// Create a minimal entry with only the required fields.
    pub fn new(workout_id: Uuid, difficulty: Difficulty, timestamp: DateTime<Utc>) -> Self {
        Self {
            workout_id,
            difficulty,
            feedback_text: None,
            completed_reps: None,
            target_reps: None,
            weight_used: None,
            target_weight: None,
            exercise_id: None,
            timestamp,
        }
    }

    /// Attach exercise targets for difficulty adaptation.
    pub fn with_exercise(
        mut self,
        exercise_id: impl Into<String>,
        target_reps: Option<u32>,
        target_weight: Option<f64>,
    ) -> Self {
        self.exercise_id = Some(exercise_id.into());
        self.target_reps = target_reps;
        self.target_weight = target_weight;
        self
    }

    /// Validate numeric fields before the entry is accepted.
    ///
    /// Difficulty membership and timestamp presence are enforced by the type
    /// system; this checks the parts it cannot: weights must be finite and
    /// non-negative, and a prescribed rep count must be at least 1.
    pub fn validate(&self) -> Result<(), FeedbackError> {
        if let Some(reps) = self.target_reps {
            if reps == 0 {
                return Err(FeedbackError::Validation(
                    "target_reps must be at least 1".to_string(),
                ));
            }
        }

        for (field, value) in [
            ("weight_used", self.weight_used),
            ("target_weight", self.target_weight),
        ] {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(FeedbackError::Validation(format!(
                        "{field} must be a finite number"
                    )));
                }
                if v < 0.0 {
                    return Err(FeedbackError::Validation(format!(
                        "{field} must be non-negative"
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Feedback recording errors.
#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("Invalid feedback: {0}")]
    Validation(String),
}
