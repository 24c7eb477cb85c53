//! Application services for the task board.

pub mod codec;
mod config;
mod drag;
mod store;
pub mod view;

pub use config::BoardConfig;
pub use drag::{DropPlan, DropTarget, plan_drop};
pub use store::{BoardError, BoardResult, BoardStore};
pub use view::{
    BoardColumns, PriorityFilter, SortOption, TaskFilter, compare_tasks, filter_tasks,
    partition_by_column, sort_tasks,
};
