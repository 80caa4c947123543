//! Bounded, newest-first feedback history.

use super::types::{FeedbackError, WorkoutFeedbackEntry};

/// Default number of entries retained in the history.
pub const DEFAULT_HISTORY_CAP: usize = 100;

/// Validating appender for the feedback history.
///
/// The history is ordered newest-first and bounded: once the cap is reached
/// the oldest entries (at the back) are evicted.
#[derive(Debug, Clone, Copy)]
pub struct FeedbackLog {
    cap: usize,
}

impl FeedbackLog {
    /// Create a log with the default cap.
    pub fn new() -> Self {
        Self {
            cap: DEFAULT_HISTORY_CAP,
        }
    }

    /// Create a log with a custom cap.
    pub fn with_cap(cap: usize) -> Self {
        Self { cap: cap.max(1) }
    }

    /// History cap.
    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Validate and prepend an entry, evicting the oldest past the cap.
    ///
    /// Validation failures leave the history untouched.
    pub fn record(
        &self,
        history: &mut Vec<WorkoutFeedbackEntry>,
        entry: WorkoutFeedbackEntry,
    ) -> Result<(), FeedbackError> {
        entry.validate()?;

        history.insert(0, entry);
        if history.len() > self.cap {
            history.truncate(self.cap);
        }

        tracing::debug!(len = history.len(), "Feedback recorded");
        Ok(())
    }
}

impl Default for FeedbackLog {
    fn default() -> Self {
        Self::new()
    }
}
