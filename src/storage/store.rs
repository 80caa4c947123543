//! Persistence contract for progress state.

use crate::progress::types::ProgressState;
use std::collections::HashMap;
use thiserror::Error;
use uuid::Uuid;

/// Durable key-value persistence of one [`ProgressState`] per user.
///
/// Plain get/set with no transactions: overlapping writers race under
/// last-write-wins, so callers serialize mutations per user. A failed save
/// must leave previously stored data intact.
pub trait ProgressStore {
    /// Load the stored state for a user, `None` if never saved.
    fn load(&self, user_id: Uuid) -> Result<Option<ProgressState>, StorageError>;

    /// Replace the stored state for a user.
    fn save(&mut self, user_id: Uuid, state: &ProgressState) -> Result<(), StorageError>;
}

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// In-memory store for tests and previews.
#[derive(Debug, Default)]
pub struct MemoryProgressStore {
    states: HashMap<Uuid, ProgressState>,
}

impl MemoryProgressStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressStore for MemoryProgressStore {
    fn load(&self, user_id: Uuid) -> Result<Option<ProgressState>, StorageError> {
        Ok(self.states.get(&user_id).cloned())
    }

    fn save(&mut self, user_id: Uuid, state: &ProgressState) -> Result<(), StorageError> {
        self.states.insert(user_id, state.clone());
        Ok(())
    }
}
