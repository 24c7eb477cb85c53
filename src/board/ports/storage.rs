//! Storage port for durable string blobs keyed by name.

use std::sync::Arc;
use thiserror::Error;

/// Result type for key-value storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Durable key-value storage holding serialized board state.
///
/// Writes replace the whole value stored under a key.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStorage: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// Returns `None` when nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing store cannot be read.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing store cannot be written.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Removes the value stored under `key`. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing store cannot be written.
    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// Errors returned by key-value storage implementations.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// The key cannot be represented by the backing store.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl StorageError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
