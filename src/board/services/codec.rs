//! Serialization of board state to storage blobs.
//!
//! Loading never fails: an unreadable or corrupt blob is logged and replaced
//! by an empty collection.

use std::collections::HashSet;

use log::warn;
use thiserror::Error;

use crate::board::{
    domain::{Activity, Task},
    ports::KeyValueStorage,
};

/// A stored blob that cannot be turned back into board state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("corrupt {collection} blob: {reason}")]
pub struct CorruptBlob {
    /// Which collection the blob held.
    pub collection: &'static str,
    /// Why decoding failed.
    pub reason: String,
}

impl CorruptBlob {
    fn tasks(reason: impl ToString) -> Self {
        Self {
            collection: "tasks",
            reason: reason.to_string(),
        }
    }

    fn activities(reason: impl ToString) -> Self {
        Self {
            collection: "activities",
            reason: reason.to_string(),
        }
    }
}

/// Serializes the task sequence in board order.
///
/// # Errors
///
/// Returns [`serde_json::Error`] when serialization fails.
pub fn encode_tasks(tasks: &[Task]) -> Result<String, serde_json::Error> {
    serde_json::to_string(tasks)
}

/// Deserializes a task sequence, rejecting blobs with repeated task ids.
///
/// # Errors
///
/// Returns [`CorruptBlob`] when the blob is not a valid task array.
pub fn decode_tasks(blob: &str) -> Result<Vec<Task>, CorruptBlob> {
    let tasks: Vec<Task> = serde_json::from_str(blob).map_err(CorruptBlob::tasks)?;
    let mut seen = HashSet::with_capacity(tasks.len());
    if let Some(duplicate) = tasks.iter().find(|task| !seen.insert(task.id())) {
        return Err(CorruptBlob::tasks(format!(
            "duplicate task id {}",
            duplicate.id()
        )));
    }
    Ok(tasks)
}

/// Serializes the activity history, newest first.
///
/// # Errors
///
/// Returns [`serde_json::Error`] when serialization fails.
pub fn encode_activities(activities: &[Activity]) -> Result<String, serde_json::Error> {
    serde_json::to_string(activities)
}

/// Deserializes an activity history, preserving stored order.
///
/// # Errors
///
/// Returns [`CorruptBlob`] when the blob is not a valid activity array.
pub fn decode_activities(blob: &str) -> Result<Vec<Activity>, CorruptBlob> {
    serde_json::from_str(blob).map_err(CorruptBlob::activities)
}

pub(crate) fn load_tasks(storage: &impl KeyValueStorage, key: &str) -> Vec<Task> {
    load_or_empty(storage, key, decode_tasks)
}

pub(crate) fn load_activities(storage: &impl KeyValueStorage, key: &str) -> Vec<Activity> {
    load_or_empty(storage, key, decode_activities)
}

fn load_or_empty<T>(
    storage: &impl KeyValueStorage,
    key: &str,
    decode: impl FnOnce(&str) -> Result<Vec<T>, CorruptBlob>,
) -> Vec<T> {
    let blob = match storage.get(key) {
        Ok(Some(blob)) => blob,
        Ok(None) => return Vec::new(),
        Err(err) => {
            warn!("event=board_load module=codec status=error key={key} error={err}");
            return Vec::new();
        }
    };
    decode(&blob).unwrap_or_else(|err| {
        warn!("event=board_load module=codec status=corrupt key={key} error={err}");
        Vec::new()
    })
}
