//! The board store: authoritative task sequence plus activity history.

use std::sync::Arc;

use log::{debug, info, warn};
use mockable::Clock;
use thiserror::Error;

use super::{
    BoardConfig, DropPlan,
    codec::{encode_activities, encode_tasks, load_activities, load_tasks},
    drag::plan_drop,
    view::{BoardColumns, SortOption, TaskFilter, filter_tasks, partition_by_column, sort_tasks},
};
use crate::board::{
    domain::{
        Activity, ActivityAction, ActivityRecorder, BoardDomainError, Task, TaskFields, TaskId,
        TaskStatus,
    },
    ports::{KeyValueStorage, SessionGate},
};

/// Service-level errors for board operations.
///
/// Every error is raised before any state changes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    /// Input failed domain validation.
    #[error(transparent)]
    Validation(#[from] BoardDomainError),

    /// No task with this id exists.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// The not-found error for a column lookup: the task exists but is not
    /// in the column the operation requires.
    #[error("task {task_id} not found in column {status}")]
    NotInColumn {
        /// The task that was looked up.
        task_id: TaskId,
        /// The column it was expected in.
        status: TaskStatus,
    },

    /// No user is signed in.
    #[error("no authenticated session")]
    Unauthenticated,
}

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// Owner of the ordered task sequence and the activity history.
///
/// Columns are not stored separately: a column is the tasks with that status,
/// in sequence order. Every mutation goes through this type, is recorded in
/// the history where it has a meaning for the user, and is written back to
/// storage before the call returns.
pub struct BoardStore<S, C>
where
    S: KeyValueStorage,
    C: Clock,
{
    storage: Arc<S>,
    clock: Arc<C>,
    config: BoardConfig,
    tasks: Vec<Task>,
    activity: ActivityRecorder,
}

impl<S, C> BoardStore<S, C>
where
    S: KeyValueStorage,
    C: Clock,
{
    /// Opens the board for a signed-in user, loading persisted state.
    ///
    /// Missing or corrupt stored state loads as an empty collection.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Unauthenticated`] when `session` reports no
    /// signed-in user.
    pub fn open(
        storage: Arc<S>,
        clock: Arc<C>,
        config: BoardConfig,
        session: &impl SessionGate,
    ) -> BoardResult<Self> {
        if !session.is_authenticated() {
            warn!("event=board_open module=store status=denied");
            return Err(BoardError::Unauthenticated);
        }

        let tasks = load_tasks(&*storage, &config.tasks_key);
        let activity = ActivityRecorder::from_entries(
            load_activities(&*storage, &config.activities_key),
            config.activity_capacity,
        );
        info!(
            "event=board_open module=store status=ok tasks={} activities={}",
            tasks.len(),
            activity.len()
        );
        Ok(Self {
            storage,
            clock,
            config,
            tasks,
            activity,
        })
    }

    /// Returns the configuration in use.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns every task in board order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the activity history, most recent first.
    #[must_use]
    pub fn activities(&self) -> &[Activity] {
        self.activity.entries()
    }

    /// Looks up a task by id.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TaskNotFound`] when no task has this id.
    pub fn task(&self, id: TaskId) -> BoardResult<&Task> {
        self.tasks
            .iter()
            .find(|task| task.id() == id)
            .ok_or(BoardError::TaskNotFound(id))
    }

    /// Iterates the tasks of one column in board order.
    pub fn column(&self, status: TaskStatus) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(move |task| task.status() == status)
    }

    /// Returns the filtered tasks grouped by column.
    #[must_use]
    pub fn view(&self, filter: &TaskFilter) -> BoardColumns<'_> {
        partition_by_column(filter_tasks(&self.tasks, filter))
    }

    /// Creates a task at the end of the sequence.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Validation`] when the title is blank.
    pub fn create_task(&mut self, fields: TaskFields, status: TaskStatus) -> BoardResult<Task> {
        let task = Task::new(fields, status, &*self.clock)?;
        self.activity
            .record(ActivityAction::Create, &task, None, &*self.clock);
        self.tasks.push(task.clone());
        debug!(
            "event=task_create module=store status=ok task_id={} column={status}",
            task.id()
        );
        self.persist();
        Ok(task)
    }

    /// Replaces every editable field of a task in place.
    ///
    /// The task keeps its id, creation time, column and position.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TaskNotFound`] for an unknown id and
    /// [`BoardError::Validation`] when the new title is blank.
    pub fn update_task(&mut self, id: TaskId, fields: TaskFields) -> BoardResult<Task> {
        let index = self.position(id)?;
        let task = self
            .tasks
            .get_mut(index)
            .ok_or(BoardError::TaskNotFound(id))?;
        task.apply(fields)?;
        let updated = task.clone();
        self.activity
            .record(ActivityAction::Edit, &updated, None, &*self.clock);
        debug!("event=task_update module=store status=ok task_id={id}");
        self.persist();
        Ok(updated)
    }

    /// Removes a task and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TaskNotFound`] for an unknown id.
    pub fn delete_task(&mut self, id: TaskId) -> BoardResult<Task> {
        let index = self.position(id)?;
        let removed = self.tasks.remove(index);
        self.activity
            .record(ActivityAction::Delete, &removed, None, &*self.clock);
        debug!("event=task_delete module=store status=ok task_id={id}");
        self.persist();
        Ok(removed)
    }

    /// Moves a task to another column without changing its position in the
    /// sequence.
    ///
    /// Returns `false` when the task already is in `status`; nothing is
    /// recorded or written in that case.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TaskNotFound`] for an unknown id.
    pub fn reassign_column(&mut self, id: TaskId, status: TaskStatus) -> BoardResult<bool> {
        let index = self.position(id)?;
        let task = self
            .tasks
            .get_mut(index)
            .ok_or(BoardError::TaskNotFound(id))?;
        if task.status() == status {
            return Ok(false);
        }
        task.set_status(status);
        let moved = task.clone();
        self.activity.record(
            ActivityAction::Move,
            &moved,
            Some(format!("Moved to {status}")),
            &*self.clock,
        );
        debug!("event=task_move module=store status=ok task_id={id} column={status}");
        self.persist();
        Ok(true)
    }

    /// Places a task immediately before another task of the same column.
    ///
    /// Ordering is not recorded in the activity history.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TaskNotFound`] when either id is unknown and
    /// [`BoardError::NotInColumn`] when `before_id` is in another column.
    pub fn reorder(&mut self, id: TaskId, before_id: TaskId) -> BoardResult<()> {
        let from = self.position(id)?;
        let target = self.position(before_id)?;
        let column = self.task(id)?.status();
        if self.task(before_id)?.status() != column {
            return Err(BoardError::NotInColumn {
                task_id: before_id,
                status: column,
            });
        }
        if from == target {
            return Ok(());
        }

        let task = self.tasks.remove(from);
        let insert_at = if from < target { target - 1 } else { target };
        self.tasks.insert(insert_at, task);
        debug!("event=task_reorder module=store status=ok task_id={id} before_id={before_id}");
        self.persist();
        Ok(())
    }

    /// Resolves a drag gesture and applies the resulting mutation.
    ///
    /// Returns the plan that was carried out. Gestures that cannot be
    /// resolved come back as [`DropPlan::Cancel`] and change nothing.
    pub fn apply_drop(&mut self, active_id: &str, over_id: Option<&str>) -> DropPlan {
        let plan = plan_drop(&self.tasks, active_id, over_id);
        let outcome = match plan {
            DropPlan::Reassign { task_id, status } => {
                self.reassign_column(task_id, status).map(|_| ())
            }
            DropPlan::Reorder { task_id, before_id } => self.reorder(task_id, before_id),
            DropPlan::Cancel => Ok(()),
        };
        match outcome {
            Ok(()) => plan,
            Err(err) => {
                debug!("event=task_drop module=store status=cancelled error={err}");
                DropPlan::Cancel
            }
        }
    }

    /// Reorders the stored sequence by due date, undated tasks last.
    ///
    /// The sort is stable and is not recorded in the activity history.
    pub fn sort_by_due_date(&mut self) {
        sort_tasks(&mut self.tasks, SortOption::DueDate);
        debug!("event=board_sort module=store status=ok order=due_date");
        self.persist();
    }

    /// Clears every task and the whole activity history.
    pub fn reset_all(&mut self) {
        self.tasks.clear();
        self.activity.clear();
        info!("event=board_reset module=store status=ok");
        self.persist();
    }

    fn position(&self, id: TaskId) -> BoardResult<usize> {
        self.tasks
            .iter()
            .position(|task| task.id() == id)
            .ok_or(BoardError::TaskNotFound(id))
    }

    /// Writes both collections back to storage. Failures are logged and
    /// otherwise ignored; in-memory state stays authoritative.
    fn persist(&self) {
        self.write_blob(&self.config.tasks_key, encode_tasks(&self.tasks));
        self.write_blob(
            &self.config.activities_key,
            encode_activities(self.activity.entries()),
        );
    }

    fn write_blob(&self, key: &str, encoded: Result<String, serde_json::Error>) {
        let result = match encoded {
            Ok(blob) => self.storage.set(key, &blob).map_err(|err| err.to_string()),
            Err(err) => Err(err.to_string()),
        };
        if let Err(err) = result {
            warn!("event=board_persist module=store status=error key={key} error={err}");
        }
    }
}
