//! Weekly and monthly completion windows.

use super::types::ProgressState;
use chrono::{DateTime, Datelike, NaiveTime, Utc};

/// Recomputes period completion counts from the feedback history.
///
/// Pure given `(history, now)`: the weekly window runs from the start of the
/// ISO week (Monday, 00:00 UTC) through now, the monthly window from the
/// first of the month. Both boundaries are inclusive.
#[derive(Debug, Clone, Copy, Default)]
pub struct PeriodAggregator;

impl PeriodAggregator {
    /// Start of the ISO week containing `now`.
    pub fn week_start(now: DateTime<Utc>) -> DateTime<Utc> {
        let date = now.date_naive();
        let monday = date - chrono::Days::new(u64::from(date.weekday().num_days_from_monday()));
        monday
            .and_time(NaiveTime::MIN)
            .and_utc()
    }

    /// Start of the calendar month containing `now`.
    pub fn month_start(now: DateTime<Utc>) -> DateTime<Utc> {
        let date = now.date_naive();
        date.with_day(1)
            .unwrap_or(date)
            .and_time(NaiveTime::MIN)
            .and_utc()
    }

    /// Recount weekly and monthly completions. Targets are left untouched.
    pub fn recompute(state: &mut ProgressState, now: DateTime<Utc>) {
        let week_start = Self::week_start(now);
        let month_start = Self::month_start(now);

        state.weekly_progress.completed = state
            .history
            .iter()
            .filter(|e| e.timestamp >= week_start)
            .count() as u32;

        state.monthly_progress.completed = state
            .history
            .iter()
            .filter(|e| e.timestamp >= month_start)
            .count() as u32;

        tracing::debug!(
            weekly = state.weekly_progress.completed,
            monthly = state.monthly_progress.completed,
            "Period aggregates recomputed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::types::{Difficulty, WorkoutFeedbackEntry};
    use chrono::TimeZone;
    use uuid::Uuid;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn entry(ts: DateTime<Utc>) -> WorkoutFeedbackEntry {
        WorkoutFeedbackEntry::new(Uuid::new_v4(), Difficulty::Perfect, ts)
    }

    #[test]
    fn test_week_starts_on_monday() {
        // 2024-01-03 is a Wednesday; the week began Monday 2024-01-01
        let start = PeriodAggregator::week_start(at(2024, 1, 3, 15));
        assert_eq!(start, at(2024, 1, 1, 0));

        // A Monday is its own week start
        let start = PeriodAggregator::week_start(at(2024, 1, 1, 9));
        assert_eq!(start, at(2024, 1, 1, 0));
    }

    #[test]
    fn test_month_start() {
        let start = PeriodAggregator::month_start(at(2024, 2, 29, 23));
        assert_eq!(start, at(2024, 2, 1, 0));
    }

    #[test]
    fn test_recompute_counts_inside_windows() {
        let mut state = ProgressState::new(4, 16);
        // Window reference: Wednesday 2024-01-17
        let now = at(2024, 1, 17, 18);

        state.history = vec![
            entry(at(2024, 1, 17, 8)),  // this week, this month
            entry(at(2024, 1, 15, 8)),  // Monday boundary, inclusive
            entry(at(2024, 1, 10, 8)),  // last week, this month
            entry(at(2023, 12, 28, 8)), // previous month
        ];

        PeriodAggregator::recompute(&mut state, now);
        assert_eq!(state.weekly_progress.completed, 2);
        assert_eq!(state.monthly_progress.completed, 3);
    }

    #[test]
    fn test_boundary_entry_is_inclusive() {
        let mut state = ProgressState::new(4, 16);
        let now = at(2024, 1, 17, 18);

        state.history = vec![entry(at(2024, 1, 15, 0))]; // exactly week start
        PeriodAggregator::recompute(&mut state, now);
        assert_eq!(state.weekly_progress.completed, 1);
    }
}
