//! Workout feedback capture and bounded history.

pub mod log;
pub mod types;

pub use log::FeedbackLog;
pub use types::{Difficulty, FeedbackError, WorkoutFeedbackEntry};
