//! Aggregate progress state and periodic completion aggregation.

pub mod aggregator;
pub mod types;

pub use aggregator::PeriodAggregator;
pub use types::{LegacyStreakRecord, PeriodProgress, ProgressState, StreakState};
