//! Directory-backed key-value storage.
//!
//! Each key is stored as `<key>.json` inside a single directory. Writes go
//! through a temporary file and a rename so a reader never sees a partially
//! written value.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::ErrorKind;

use crate::board::ports::{KeyValueStorage, StorageError, StorageResult};

const FILE_EXTENSION: &str = "json";

/// Key-value storage rooted at a directory handle.
#[derive(Debug)]
pub struct DirectoryKeyValueStorage {
    dir: Dir,
}

impl DirectoryKeyValueStorage {
    /// Opens the directory at `path`, creating it when missing.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Persistence`] when the directory cannot be
    /// created or opened.
    pub fn open(path: &Utf8Path) -> StorageResult<Self> {
        Dir::create_ambient_dir_all(path, ambient_authority())
            .map_err(StorageError::persistence)?;
        let dir =
            Dir::open_ambient_dir(path, ambient_authority()).map_err(StorageError::persistence)?;
        Ok(Self { dir })
    }
}

/// Maps a key to its file name, rejecting keys that could escape the
/// directory or collide with temporary files.
fn file_name(key: &str) -> StorageResult<String> {
    let is_valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-' | '.'));
    if !is_valid {
        return Err(StorageError::InvalidKey(key.to_owned()));
    }
    Ok(format!("{key}.{FILE_EXTENSION}"))
}

impl KeyValueStorage for DirectoryKeyValueStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let name = file_name(key)?;
        match self.dir.read_to_string(&name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::persistence(err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let name = file_name(key)?;
        let staging = format!("{name}.tmp");
        self.dir
            .write(&staging, value)
            .map_err(StorageError::persistence)?;
        self.dir
            .rename(&staging, &self.dir, &name)
            .map_err(StorageError::persistence)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let name = file_name(key)?;
        match self.dir.remove_file(&name) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError::persistence(err)),
        }
    }
}
