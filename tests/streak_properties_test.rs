//! Streak transition and status properties.

use adaptrack::{StreakState, StreakTracker};
use chrono::{DateTime, TimeZone, Utc};

fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 8, 0, 0).unwrap()
}

#[test]
fn test_n_consecutive_days_give_streak_n() {
    let mut streak = StreakState::default();

    let start = at(2024, 3, 1);
    for n in 0..20 {
        StreakTracker::update(&mut streak, start + chrono::Duration::days(n));
    }

    assert_eq!(streak.days, 20);
    assert_eq!(streak.longest, 20);
}

#[test]
fn test_any_gap_resets_regardless_of_length() {
    for gap in 2..10 {
        let mut streak = StreakState::default();

        for n in 0..15 {
            StreakTracker::update(&mut streak, at(2024, 3, 1) + chrono::Duration::days(n));
        }
        assert_eq!(streak.days, 15);

        StreakTracker::update(
            &mut streak,
            at(2024, 3, 15) + chrono::Duration::days(gap),
        );
        assert_eq!(streak.days, 1, "gap of {gap} days must reset to 1");
    }
}

#[test]
fn test_same_day_entries_do_not_double_count() {
    let mut streak = StreakState::default();

    StreakTracker::update(&mut streak, at(2024, 3, 1));
    StreakTracker::update(&mut streak, at(2024, 3, 2));
    let before = streak;

    // A second workout on March 2nd, later in the day
    StreakTracker::update(
        &mut streak,
        Utc.with_ymd_and_hms(2024, 3, 2, 20, 30, 0).unwrap(),
    );

    assert_eq!(streak, before);
}

#[test]
fn test_days_until_break_bounds() {
    let mut streak = StreakState::default();
    StreakTracker::update(&mut streak, at(2024, 3, 1));

    for days_since in 0..10 {
        let now = at(2024, 3, 1) + chrono::Duration::days(days_since);
        let snap = StreakTracker::status(&streak, now);

        assert!(snap.days_until_break <= 2);
        if days_since >= 2 {
            assert_eq!(snap.days_until_break, 0);
        } else {
            assert!(snap.days_until_break > 0);
        }
    }
}

#[test]
fn test_at_risk_message_overrides_bucket() {
    let mut streak = StreakState::default();
    for n in 0..5 {
        StreakTracker::update(&mut streak, at(2024, 3, 1) + chrono::Duration::days(n));
    }

    // Two days later the streak is at risk but not yet reset
    let snap = StreakTracker::status(&streak, at(2024, 3, 7));
    assert_eq!(snap.current_streak, 5);
    assert!(!snap.is_on_streak);
    assert!(snap.message.contains("at risk"));
}
