//! Storage module for persistence and configuration.

pub mod config;
pub mod database;
pub mod file_store;
pub mod schema;
pub mod store;

pub use config::{load_config, save_config, ConfigError, EngineConfig};
pub use database::SqliteProgressStore;
pub use file_store::FileProgressStore;
pub use store::{MemoryProgressStore, ProgressStore, StorageError};
