//! Activity log entries and the bounded recorder that owns them.

use super::{ActivityId, Task, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Number of activity entries kept unless configured otherwise.
pub const DEFAULT_ACTIVITY_CAPACITY: usize = 50;

/// Kind of mutation an activity entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityAction {
    /// A task was created.
    Create,
    /// A task's fields were edited.
    Edit,
    /// A task changed column.
    Move,
    /// A task was deleted.
    Delete,
}

impl ActivityAction {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Edit => "edit",
            Self::Move => "move",
            Self::Delete => "delete",
        }
    }

    /// Returns the label shown in the activity history.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Create => "Created task",
            Self::Edit => "Updated task",
            Self::Move => "Moved task",
            Self::Delete => "Deleted task",
        }
    }
}

/// One entry in the activity history.
///
/// The task reference is a snapshot taken at mutation time and stays valid
/// after the task is edited or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    id: ActivityId,
    action: ActivityAction,
    task_id: TaskId,
    task_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    timestamp: DateTime<Utc>,
}

impl Activity {
    /// Captures a snapshot of `task` for the given action.
    #[must_use]
    pub fn snapshot(
        action: ActivityAction,
        task: &Task,
        details: Option<String>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: ActivityId::new(),
            action,
            task_id: task.id(),
            task_title: task.title().as_str().to_owned(),
            details,
            timestamp: clock.utc(),
        }
    }

    /// Returns the entry identifier.
    #[must_use]
    pub const fn id(&self) -> ActivityId {
        self.id
    }

    /// Returns the recorded action.
    #[must_use]
    pub const fn action(&self) -> ActivityAction {
        self.action
    }

    /// Returns the identifier of the affected task.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the affected task's title at mutation time.
    #[must_use]
    pub fn task_title(&self) -> &str {
        &self.task_title
    }

    /// Returns free-form details, if any.
    #[must_use]
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    /// Returns when the entry was recorded.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Append-only, newest-first activity history with a fixed capacity.
///
/// Inserting past capacity evicts the oldest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRecorder {
    entries: Vec<Activity>,
    capacity: usize,
}

impl ActivityRecorder {
    /// Creates an empty recorder. A zero capacity is raised to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Creates a recorder from entries already ordered newest-first,
    /// keeping only the newest `capacity` of them.
    #[must_use]
    pub fn from_entries(mut entries: Vec<Activity>, capacity: usize) -> Self {
        let bounded = capacity.max(1);
        entries.truncate(bounded);
        Self {
            entries,
            capacity: bounded,
        }
    }

    /// Records an entry for `task` at the head of the history.
    pub fn record(
        &mut self,
        action: ActivityAction,
        task: &Task,
        details: Option<String>,
        clock: &impl Clock,
    ) {
        let activity = Activity::snapshot(action, task, details, clock);
        self.entries.insert(0, activity);
        self.entries.truncate(self.capacity);
    }

    /// Returns the most recent entry, if any.
    #[must_use]
    pub fn latest(&self) -> Option<&Activity> {
        self.entries.first()
    }

    /// Returns the entries, most recent first.
    #[must_use]
    pub fn entries(&self) -> &[Activity] {
        &self.entries
    }

    /// Returns the number of entries held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the history is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the maximum number of entries kept.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for ActivityRecorder {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVITY_CAPACITY)
    }
}
