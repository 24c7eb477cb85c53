//! Board workflow tests against in-memory storage.

use crate::in_memory::helpers::{TestBoard, add, column_titles, open, storage};
use eyre::ensure;
use kanban::board::{
    adapters::memory::InMemoryKeyValueStorage,
    domain::{ActivityAction, Priority, TaskFields, TaskStatus},
    ports::KeyValueStorage,
    services::BoardError,
};
use rstest::rstest;

#[rstest]
fn full_task_lifecycle_is_recorded_newest_first(
    storage: InMemoryKeyValueStorage,
) -> eyre::Result<()> {
    let mut board: TestBoard = open(&storage)?;

    let id = add(&mut board, "Draft roadmap", TaskStatus::Todo)?;
    board.update_task(
        id,
        TaskFields::new("Draft Q3 roadmap")
            .with_priority(Priority::High)
            .with_tags_csv("planning, q3"),
    )?;
    board.reassign_column(id, TaskStatus::Doing)?;
    let removed = board.delete_task(id)?;

    ensure!(removed.tags() == ["planning", "q3"]);
    ensure!(board.tasks().is_empty());
    let actions: Vec<_> = board
        .activities()
        .iter()
        .map(|entry| entry.action())
        .collect();
    ensure!(
        actions
            == vec![
                ActivityAction::Delete,
                ActivityAction::Move,
                ActivityAction::Edit,
                ActivityAction::Create,
            ]
    );
    let titles: Vec<_> = board
        .activities()
        .iter()
        .map(|entry| entry.task_title())
        .collect();
    ensure!(
        titles
            == vec![
                "Draft Q3 roadmap",
                "Draft Q3 roadmap",
                "Draft Q3 roadmap",
                "Draft roadmap",
            ]
    );
    Ok(())
}

#[rstest]
fn state_survives_reopening_the_board(storage: InMemoryKeyValueStorage) -> eyre::Result<()> {
    let mut board = open(&storage)?;
    add(&mut board, "A", TaskStatus::Todo)?;
    let b = add(&mut board, "B", TaskStatus::Todo)?;
    add(&mut board, "C", TaskStatus::Done)?;
    board.reassign_column(b, TaskStatus::Doing)?;

    let reopened = open(&storage)?;

    ensure!(column_titles(&reopened, TaskStatus::Todo) == ["A"]);
    ensure!(column_titles(&reopened, TaskStatus::Doing) == ["B"]);
    ensure!(column_titles(&reopened, TaskStatus::Done) == ["C"]);
    ensure!(reopened.activities() == board.activities());
    Ok(())
}

#[rstest]
fn reset_is_persisted_for_both_collections(storage: InMemoryKeyValueStorage) -> eyre::Result<()> {
    let mut board = open(&storage)?;
    add(&mut board, "A", TaskStatus::Todo)?;
    add(&mut board, "B", TaskStatus::Doing)?;

    board.reset_all();

    ensure!(storage.get("board_tasks")?.as_deref() == Some("[]"));
    ensure!(storage.get("board_activities")?.as_deref() == Some("[]"));
    let reopened = open(&storage)?;
    ensure!(reopened.tasks().is_empty());
    ensure!(reopened.activities().is_empty());
    Ok(())
}

#[rstest]
fn corrupt_task_blob_does_not_discard_valid_history(
    storage: InMemoryKeyValueStorage,
) -> eyre::Result<()> {
    let mut board = open(&storage)?;
    add(&mut board, "A", TaskStatus::Todo)?;
    storage.set("board_tasks", "garbage")?;

    let reopened = open(&storage)?;

    ensure!(reopened.tasks().is_empty());
    ensure!(reopened.activities().len() == 1);
    Ok(())
}

#[rstest]
fn validation_errors_surface_with_a_readable_message(
    storage: InMemoryKeyValueStorage,
) -> eyre::Result<()> {
    let mut board = open(&storage)?;

    let err = board
        .create_task(TaskFields::new(" "), TaskStatus::Todo)
        .expect_err("blank title is rejected");

    ensure!(matches!(err, BoardError::Validation(_)));
    ensure!(err.to_string() == "task title must not be empty");
    ensure!(storage.get("board_tasks")?.is_none(), "nothing is written");
    Ok(())
}
