//! In-memory key-value storage for tests and ephemeral boards.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::ports::{KeyValueStorage, StorageError, StorageResult};

/// Thread-safe in-memory key-value storage.
///
/// Clones share the same underlying map, so a clone kept by a test observes
/// every write made through the board.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStorage {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryKeyValueStorage {
    /// Creates an empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage pre-populated with the given entries.
    #[must_use]
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self {
            entries: Arc::new(RwLock::new(map)),
        }
    }
}

fn poisoned(err: &impl ToString) -> StorageError {
    StorageError::persistence(std::io::Error::other(err.to_string()))
}

impl KeyValueStorage for InMemoryKeyValueStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let entries = self.entries.read().map_err(|err| poisoned(&err))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut entries = self.entries.write().map_err(|err| poisoned(&err))?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let mut entries = self.entries.write().map_err(|err| poisoned(&err))?;
        entries.remove(key);
        Ok(())
    }
}
