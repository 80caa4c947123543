//! JSON file-backed progress store.

use super::store::{ProgressStore, StorageError};
use crate::progress::types::ProgressState;
use std::path::PathBuf;
use uuid::Uuid;

/// One JSON document per user under the data directory.
///
/// Writes go to a temporary sibling first and are renamed into place, so a
/// failed write never truncates the previous document.
#[derive(Debug, Clone)]
pub struct FileProgressStore {
    dir: PathBuf,
}

impl FileProgressStore {
    /// Store documents under the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store documents under the default application data directory.
    pub fn default_location() -> Self {
        Self::new(super::config::get_data_dir().join("progress"))
    }

    fn path_for(&self, user_id: Uuid) -> PathBuf {
        self.dir.join(format!("{user_id}.json"))
    }
}

impl ProgressStore for FileProgressStore {
    fn load(&self, user_id: Uuid) -> Result<Option<ProgressState>, StorageError> {
        let path = self.path_for(user_id);

        if !path.exists() {
            return Ok(None);
        }

        let content =
            std::fs::read_to_string(&path).map_err(|e| StorageError::IoError(e.to_string()))?;

        let state = serde_json::from_str(&content)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        Ok(Some(state))
    }

    fn save(&mut self, user_id: Uuid, state: &ProgressState) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| StorageError::IoError(e.to_string()))?;

        let content = serde_json::to_string_pretty(state)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        let path = self.path_for(user_id);
        let tmp = path.with_extension("json.tmp");

        std::fs::write(&tmp, content).map_err(|e| StorageError::IoError(e.to_string()))?;
        std::fs::rename(&tmp, &path).map_err(|e| StorageError::IoError(e.to_string()))?;

        tracing::debug!(user_id = %user_id, path = %path.display(), "Progress saved");
        Ok(())
    }
}
