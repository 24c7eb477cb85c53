//! Domain model for the task board.
//!
//! Tasks live in a single ordered sequence; column membership is the task's
//! status. Every mutation is recorded in a bounded activity history.

mod activity;
mod column;
mod error;
mod ids;
mod task;

pub use activity::{Activity, ActivityAction, ActivityRecorder, DEFAULT_ACTIVITY_CAPACITY};
pub use column::{Priority, TaskStatus};
pub use error::{BoardDomainError, ParsePriorityError, ParseTaskIdError, ParseTaskStatusError};
pub use ids::{ActivityId, TaskId};
pub use task::{Task, TaskFields, TaskTitle};
