//! Shared test helpers for in-memory board integration tests.

use std::sync::Arc;

use kanban::board::{
    adapters::memory::{InMemoryKeyValueStorage, StaticSession},
    domain::{TaskFields, TaskId, TaskStatus},
    services::{BoardConfig, BoardResult, BoardStore},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Board type used across integration tests.
pub type TestBoard = BoardStore<InMemoryKeyValueStorage, DefaultClock>;

/// Provides fresh shared storage for each test.
#[fixture]
pub fn storage() -> InMemoryKeyValueStorage {
    InMemoryKeyValueStorage::new()
}

/// Opens a board over `storage` for a signed-in user.
///
/// # Errors
///
/// Returns an error if the session gate refuses the board.
pub fn open(storage: &InMemoryKeyValueStorage) -> BoardResult<TestBoard> {
    BoardStore::open(
        Arc::new(storage.clone()),
        Arc::new(DefaultClock),
        BoardConfig::default(),
        &StaticSession::signed_in(),
    )
}

/// Creates a task with default fields and returns its id.
///
/// # Errors
///
/// Returns an error if the title is blank.
pub fn add(board: &mut TestBoard, title: &str, status: TaskStatus) -> BoardResult<TaskId> {
    Ok(board.create_task(TaskFields::new(title), status)?.id())
}

/// Returns the titles of one column in board order.
#[must_use]
pub fn column_titles(board: &TestBoard, status: TaskStatus) -> Vec<String> {
    board
        .column(status)
        .map(|task| task.title().as_str().to_owned())
        .collect()
}
