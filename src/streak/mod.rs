//! Continuous-day workout streak tracking.

pub mod tracker;

pub use tracker::{StreakSnapshot, StreakTracker};
