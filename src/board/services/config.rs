//! Board configuration.

use crate::board::domain::DEFAULT_ACTIVITY_CAPACITY;
use serde::Deserialize;

/// Storage keys and limits used by a [`BoardStore`](super::BoardStore).
///
/// # Examples
///
/// ```
/// use kanban::board::services::BoardConfig;
///
/// let config = BoardConfig::default();
/// assert_eq!(config.tasks_key, "board_tasks");
/// assert_eq!(config.activity_capacity, 50);
///
/// let custom = BoardConfig::from_json(r#"{"activity_capacity": 10}"#)
///     .expect("valid config");
/// assert_eq!(custom.activity_capacity, 10);
/// assert_eq!(custom.activities_key, "board_activities");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Storage key of the serialized task sequence.
    pub tasks_key: String,
    /// Storage key of the serialized activity history.
    pub activities_key: String,
    /// Maximum number of activity entries kept. Zero is treated as one.
    pub activity_capacity: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            tasks_key: "board_tasks".to_owned(),
            activities_key: "board_activities".to_owned(),
            activity_capacity: DEFAULT_ACTIVITY_CAPACITY,
        }
    }
}

impl BoardConfig {
    /// Parses a configuration document, filling absent fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] when the document is not a valid
    /// configuration object.
    pub fn from_json(document: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(document)
    }

    /// Sets both storage keys.
    #[must_use]
    pub fn with_keys(
        mut self,
        tasks_key: impl Into<String>,
        activities_key: impl Into<String>,
    ) -> Self {
        self.tasks_key = tasks_key.into();
        self.activities_key = activities_key.into();
        self
    }

    /// Sets the activity capacity.
    #[must_use]
    pub const fn with_activity_capacity(mut self, capacity: usize) -> Self {
        self.activity_capacity = capacity;
        self
    }
}
