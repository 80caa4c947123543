//! Achievement evaluation scenarios through the engine API.

use adaptrack::{
    AchievementId, Difficulty, EngineConfig, MemoryProgressStore, ProgressEngine,
    WorkoutFeedbackEntry,
};
use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

fn at(m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, m, d, 8, 0, 0).unwrap()
}

fn engine() -> ProgressEngine<MemoryProgressStore> {
    ProgressEngine::open(
        Uuid::new_v4(),
        EngineConfig::default(),
        MemoryProgressStore::new(),
    )
    .unwrap()
}

fn entry(ts: DateTime<Utc>) -> WorkoutFeedbackEntry {
    WorkoutFeedbackEntry::new(Uuid::new_v4(), Difficulty::Perfect, ts)
}

fn is_streak_id(id: &AchievementId) -> bool {
    matches!(
        id,
        AchievementId::Streak3 | AchievementId::Streak5 | AchievementId::Streak7Plus
    )
}

#[test]
fn test_three_perfect_days() {
    let mut engine = engine();

    for d in 1..=3 {
        engine.record_feedback_at(entry(at(1, d)), at(1, d)).unwrap();
    }

    assert_eq!(engine.state().streak.days, 3);
    assert_eq!(engine.state().total_workouts, 3);

    // With the unified streak record the 3-day bucket fires; no count or
    // weekly milestones are due yet.
    let ids = engine.check_achievements();
    assert_eq!(ids, vec![AchievementId::Streak3]);
}

#[test]
fn test_tenth_workout_hits_the_milestone() {
    let mut engine = engine();

    for d in 1..=10 {
        engine.record_feedback_at(entry(at(1, d)), at(1, d)).unwrap();
    }

    let ids = engine.check_achievements();
    assert!(ids.contains(&AchievementId::Workouts10));
}

#[test]
fn test_eleventh_workout_emits_no_count_milestone() {
    let mut engine = engine();

    for d in 1..=11 {
        engine.record_feedback_at(entry(at(1, d)), at(1, d)).unwrap();
    }

    let ids = engine.check_achievements();
    assert!(!ids.iter().any(|id| matches!(
        id,
        AchievementId::Workouts10
            | AchievementId::Workouts25
            | AchievementId::Workouts50
            | AchievementId::Workouts100
    )));
}

#[test]
fn test_at_most_one_streak_bucket() {
    let mut engine = engine();

    for d in 1..=20 {
        engine.record_feedback_at(entry(at(1, d)), at(1, d)).unwrap();
        let streak_ids = engine
            .check_achievements()
            .iter()
            .filter(|id| is_streak_id(*id))
            .count();
        assert!(streak_ids <= 1, "day {d}: multiple streak buckets");
    }
}

#[test]
fn test_weekly_target_met_fires_inside_the_window() {
    let mut engine = engine();

    // Four workouts Monday..Thursday of one ISO week (2024-01-01 is a Monday)
    for d in 1..=4 {
        engine.record_feedback_at(entry(at(1, d)), at(1, 4)).unwrap();
    }

    let ids = engine.check_achievements();
    assert!(ids.contains(&AchievementId::WeeklyTargetMet));
}

#[test]
fn test_ids_render_as_stable_strings() {
    assert_eq!(AchievementId::Streak7Plus.to_string(), "streak_7_plus");
    assert_eq!(AchievementId::Workouts25.to_string(), "workouts_25");
    assert_eq!(
        serde_json::to_string(&AchievementId::WeeklyTargetMet).unwrap(),
        "\"weekly_target_met\""
    );
}
