//! Persistent key-value storage.
//!
//! The whole site document lives under a single key, so the backend only
//! needs `get` and `set` on string values.

#[cfg(test)]
mod memory;
mod sqlite;

#[cfg(test)]
pub use memory::MemoryKeyValueStore;
pub use sqlite::{init_database, SqliteKeyValueStore};

use async_trait::async_trait;

use crate::errors::AppError;

/// A durable string-to-string map.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Value stored under `key`, or `None` when the key was never written.
    async fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Overwrite the value under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
}
