//! Read-time projections over the task sequence.
//!
//! Nothing here is cached; every projection is recomputed from the store's
//! current sequence and keeps its relative order unless it sorts.

use std::borrow::Borrow;
use std::cmp::Ordering;

use crate::board::domain::{ParsePriorityError, Priority, Task, TaskStatus};

/// Priority filter applied to the board.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PriorityFilter {
    /// Every priority passes.
    #[default]
    All,
    /// Only tasks with exactly this priority pass.
    Only(Priority),
}

impl PriorityFilter {
    /// Returns whether `priority` passes the filter.
    #[must_use]
    pub fn accepts(self, priority: Priority) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == priority,
        }
    }
}

impl TryFrom<&str> for PriorityFilter {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        Priority::try_from(value).map(Self::Only)
    }
}

/// Search and priority criteria for the board view.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskFilter {
    search: String,
    priority: PriorityFilter,
}

impl TaskFilter {
    /// Creates a filter that passes every task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title search term. Matching is a case-insensitive substring
    /// test; an empty term matches everything.
    #[must_use]
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into().to_lowercase();
        self
    }

    /// Sets the priority filter.
    #[must_use]
    pub const fn with_priority(mut self, priority: PriorityFilter) -> Self {
        self.priority = priority;
        self
    }

    /// Returns whether `task` passes both criteria.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.priority.accepts(task.priority())
            && task.title().as_str().to_lowercase().contains(&self.search)
    }
}

/// Returns the tasks passing `filter`, in board order.
#[must_use]
pub fn filter_tasks<'a>(tasks: &'a [Task], filter: &TaskFilter) -> Vec<&'a Task> {
    tasks.iter().filter(|task| filter.matches(task)).collect()
}

/// Tasks grouped into the three fixed columns.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BoardColumns<'a> {
    todo: Vec<&'a Task>,
    doing: Vec<&'a Task>,
    done: Vec<&'a Task>,
}

impl<'a> BoardColumns<'a> {
    /// Returns the tasks in `status`, in board order.
    #[must_use]
    pub fn get(&self, status: TaskStatus) -> &[&'a Task] {
        match status {
            TaskStatus::Todo => &self.todo,
            TaskStatus::Doing => &self.doing,
            TaskStatus::Done => &self.done,
        }
    }

    /// Iterates the columns in display order.
    pub fn iter(&self) -> impl Iterator<Item = (TaskStatus, &[&'a Task])> {
        TaskStatus::ALL
            .into_iter()
            .map(move |status| (status, self.get(status)))
    }

    /// Returns the total number of tasks across columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.todo.len() + self.doing.len() + self.done.len()
    }

    /// Returns whether every column is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn column_mut(&mut self, status: TaskStatus) -> &mut Vec<&'a Task> {
        match status {
            TaskStatus::Todo => &mut self.todo,
            TaskStatus::Doing => &mut self.doing,
            TaskStatus::Done => &mut self.done,
        }
    }
}

/// Groups tasks by status, keeping their relative order within each column.
#[must_use]
pub fn partition_by_column<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> BoardColumns<'a> {
    let mut columns = BoardColumns::default();
    for task in tasks {
        columns.column_mut(task.status()).push(task);
    }
    columns
}

/// Orderings offered by the board.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOption {
    /// Earliest due date first; undated tasks last.
    #[default]
    DueDate,
    /// Case-insensitive title, A to Z.
    Title,
    /// Most urgent first.
    Priority,
    /// Oldest first.
    CreatedAt,
}

/// Compares two tasks under `option`.
#[must_use]
pub fn compare_tasks(left: &Task, right: &Task, option: SortOption) -> Ordering {
    match option {
        SortOption::DueDate => match (left.due_date(), right.due_date()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        SortOption::Title => left
            .title()
            .as_str()
            .to_lowercase()
            .cmp(&right.title().as_str().to_lowercase()),
        SortOption::Priority => right.priority().rank().cmp(&left.priority().rank()),
        SortOption::CreatedAt => left.created_at().cmp(&right.created_at()),
    }
}

/// Stable sort of `tasks` under `option`; ties keep their input order.
pub fn sort_tasks<T: Borrow<Task>>(tasks: &mut [T], option: SortOption) {
    tasks.sort_by(|left, right| compare_tasks(left.borrow(), right.borrow(), option));
}
