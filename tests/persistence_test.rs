//! Persistence round-trips and save-failure behavior.

use adaptrack::{
    Difficulty, EngineConfig, FileProgressStore, ProgressEngine, ProgressState, ProgressStore,
    SqliteProgressStore, StorageError, WorkoutFeedbackEntry,
};
use chrono::{DateTime, TimeZone, Utc};
use tempfile::TempDir;
use uuid::Uuid;

fn at(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, d, 8, 0, 0).unwrap()
}

fn entry(d: u32) -> WorkoutFeedbackEntry {
    WorkoutFeedbackEntry::new(Uuid::new_v4(), Difficulty::Perfect, at(d)).with_exercise(
        "row",
        Some(12),
        Some(30.0),
    )
}

#[test]
fn test_file_store_round_trip_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let mut store = FileProgressStore::new(dir.path());
    let user = Uuid::new_v4();

    let mut state = ProgressState::new(4, 16);
    state.total_workouts = 5;
    state.streak.days = 2;
    store.save(user, &state).unwrap();

    // save(load()) followed by load() reproduces an equal state
    let loaded = store.load(user).unwrap().unwrap();
    store.save(user, &loaded).unwrap();
    assert_eq!(store.load(user).unwrap().unwrap(), loaded);
}

#[test]
fn test_engine_state_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("progress.db");
    let user = Uuid::new_v4();

    {
        let store = SqliteProgressStore::open(&path).unwrap();
        let mut engine = ProgressEngine::open(user, EngineConfig::default(), store).unwrap();
        for d in 1..=3 {
            engine.record_feedback_at(entry(d), at(d)).unwrap();
        }
    }

    let store = SqliteProgressStore::open(&path).unwrap();
    let engine = ProgressEngine::open(user, EngineConfig::default(), store).unwrap();

    assert_eq!(engine.state().streak.days, 3);
    assert_eq!(engine.state().total_workouts, 3);
    assert_eq!(engine.get_adaptation("row").reps, 13); // ceil(12 * 1.05)
}

/// Store that accepts nothing, for save-failure behavior.
struct RejectingStore;

impl ProgressStore for RejectingStore {
    fn load(&self, _user_id: Uuid) -> Result<Option<ProgressState>, StorageError> {
        Ok(None)
    }

    fn save(&mut self, _user_id: Uuid, _state: &ProgressState) -> Result<(), StorageError> {
        Err(StorageError::IoError("disk full".to_string()))
    }
}

#[test]
fn test_failed_save_leaves_in_memory_state_unchanged() {
    let mut engine = ProgressEngine::open(Uuid::new_v4(), EngineConfig::default(), RejectingStore)
        .unwrap();

    let result = engine.record_feedback_at(entry(1), at(1));
    assert!(result.is_err());

    // The mutation was rolled back with the failed save
    assert_eq!(engine.state().total_workouts, 0);
    assert!(engine.state().history.is_empty());
    assert_eq!(engine.state().streak.days, 0);
}
