//! Task aggregate and its editable field set.

use super::{BoardDomainError, Priority, TaskId, TaskStatus};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated, non-blank task title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated title. The text is stored as given.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTitle`] when the value is empty after
    /// trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(BoardDomainError::EmptyTitle);
        }
        Ok(Self(raw))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TaskTitle {
    type Error = BoardDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskTitle> for String {
    fn from(value: TaskTitle) -> Self {
        value.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// User-editable task fields, as submitted from a create or edit form.
///
/// The title is carried unvalidated; validation happens when the fields are
/// applied to a [`Task`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFields {
    title: String,
    description: Option<String>,
    priority: Priority,
    due_date: Option<DateTime<Utc>>,
    tags: Vec<String>,
}

impl TaskFields {
    /// Creates a field set with the given title and default values.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority: Priority::default(),
            due_date: None,
            tags: Vec::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Clears the due date.
    #[must_use]
    pub const fn without_due_date(mut self) -> Self {
        self.due_date = None;
        self
    }

    /// Sets the tags verbatim.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    /// Sets the tags from comma-separated input.
    ///
    /// Each segment is trimmed and empty segments are dropped. Duplicates
    /// and input order are kept.
    #[must_use]
    pub fn with_tags_csv(self, input: &str) -> Self {
        let tags = input
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_owned);
        self.with_tags(tags)
    }

    /// Returns the raw title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

impl From<&Task> for TaskFields {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title.as_str().to_owned(),
            description: task.description.clone(),
            priority: task.priority,
            due_date: task.due_date,
            tags: task.tags.clone(),
        }
    }
}

/// A card on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    tags: Vec<String>,
    status: TaskStatus,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task in the given column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTitle`] when the title is blank.
    pub fn new(
        fields: TaskFields,
        status: TaskStatus,
        clock: &impl Clock,
    ) -> Result<Self, BoardDomainError> {
        let title = TaskTitle::new(fields.title)?;
        Ok(Self {
            id: TaskId::new(),
            title,
            description: normalize_description(fields.description),
            priority: fields.priority,
            due_date: fields.due_date,
            tags: fields.tags,
            status,
            created_at: clock.utc(),
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the tags in input order.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns the column the task belongs to.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns whether the due date lies strictly before `now`.
    #[must_use]
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.due_date.is_some_and(|due| due < now)
    }

    /// Replaces every editable field, keeping identity, creation time and
    /// column.
    ///
    /// Nothing is changed when validation fails.
    pub(crate) fn apply(&mut self, fields: TaskFields) -> Result<(), BoardDomainError> {
        self.title = TaskTitle::new(fields.title)?;
        self.description = normalize_description(fields.description);
        self.priority = fields.priority;
        self.due_date = fields.due_date;
        self.tags = fields.tags;
        Ok(())
    }

    pub(crate) const fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }
}

fn normalize_description(description: Option<String>) -> Option<String> {
    description
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
}
