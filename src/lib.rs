//! Adaptrack - Adaptive Training Progress Engine
//!
//! Client-resident progress engine for a consumer fitness app. Ingests
//! per-workout feedback, maintains a continuous-day streak, aggregates
//! weekly/monthly completion against goals, derives per-exercise difficulty
//! adaptations, and evaluates achievement thresholds. Screens, chat, video,
//! and push rendering live outside this crate and talk to the engine through
//! its API and the notification facts it emits.

pub mod achievements;
pub mod adaptation;
pub mod engine;
pub mod feedback;
pub mod notifications;
pub mod progress;
pub mod storage;
pub mod streak;

// Re-export commonly used types
pub use achievements::{AchievementEvaluator, AchievementId};
pub use adaptation::{AdaptationTargets, AdaptiveDifficultyEngine, ExerciseAdaptation};
pub use engine::{EngineError, ProgressEngine, WeeklyProgressSummary};
pub use feedback::{Difficulty, FeedbackError, FeedbackLog, WorkoutFeedbackEntry};
pub use notifications::{DisplayPreferences, Dispatcher, Notification, NotificationSink};
pub use progress::{PeriodAggregator, PeriodProgress, ProgressState, StreakState};
pub use storage::{
    EngineConfig, FileProgressStore, MemoryProgressStore, ProgressStore, SqliteProgressStore,
    StorageError,
};
pub use streak::{StreakSnapshot, StreakTracker};
