//! Drag-and-drop resolution.
//!
//! A gesture names the dragged card and the droppable it was released over.
//! Resolution turns it into at most one store mutation; anything that cannot
//! be resolved cancels the gesture without touching state.

use std::str::FromStr;

use crate::board::domain::{Task, TaskId, TaskStatus};

/// What a gesture was released over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// Another card (or the dragged card itself).
    Task(TaskId),
    /// An empty area of a column.
    Column(TaskStatus),
    /// No droppable.
    None,
}

impl DropTarget {
    /// Classifies a raw droppable id against the current tasks.
    ///
    /// Task ids take precedence over column ids.
    #[must_use]
    pub fn resolve(tasks: &[Task], over_id: Option<&str>) -> Self {
        let Some(raw) = over_id else {
            return Self::None;
        };
        if let Some(task) = find_by_raw_id(tasks, raw) {
            return Self::Task(task.id());
        }
        TaskStatus::try_from(raw).map_or(Self::None, Self::Column)
    }
}

/// The single store call a gesture resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropPlan {
    /// Move the task to another column, appending it to that column.
    Reassign {
        /// Dragged task.
        task_id: TaskId,
        /// Destination column.
        status: TaskStatus,
    },
    /// Place the task immediately before another card in the same column.
    Reorder {
        /// Dragged task.
        task_id: TaskId,
        /// Card the dragged task lands in front of.
        before_id: TaskId,
    },
    /// No mutation.
    Cancel,
}

/// Resolves a gesture against the current task sequence.
///
/// A drop whose target lies in another column always reassigns and never
/// also reorders. Same-column drops reorder only when released over a
/// different card.
#[must_use]
pub fn plan_drop(tasks: &[Task], active_id: &str, over_id: Option<&str>) -> DropPlan {
    let Some(dragged) = find_by_raw_id(tasks, active_id) else {
        return DropPlan::Cancel;
    };
    let target = DropTarget::resolve(tasks, over_id);
    let target_status = match target {
        DropTarget::Task(id) => tasks
            .iter()
            .find(|task| task.id() == id)
            .map_or(dragged.status(), Task::status),
        DropTarget::Column(status) => status,
        DropTarget::None => dragged.status(),
    };

    if target_status != dragged.status() {
        return DropPlan::Reassign {
            task_id: dragged.id(),
            status: target_status,
        };
    }
    match target {
        DropTarget::Task(before_id) if before_id != dragged.id() => DropPlan::Reorder {
            task_id: dragged.id(),
            before_id,
        },
        _ => DropPlan::Cancel,
    }
}

fn find_by_raw_id<'a>(tasks: &'a [Task], raw: &str) -> Option<&'a Task> {
    let id = TaskId::from_str(raw).ok()?;
    tasks.iter().find(|task| task.id() == id)
}
