//! Drag gesture tests against an in-memory board.

use crate::in_memory::helpers::{add, column_titles, open, storage};
use eyre::ensure;
use kanban::board::{
    adapters::memory::InMemoryKeyValueStorage,
    domain::{ActivityAction, TaskStatus},
    services::DropPlan,
};
use rstest::rstest;

#[rstest]
fn cross_column_drop_keeps_other_columns_in_order(
    storage: InMemoryKeyValueStorage,
) -> eyre::Result<()> {
    let mut board = open(&storage)?;
    let a = add(&mut board, "A", TaskStatus::Todo)?;
    add(&mut board, "B", TaskStatus::Doing)?;
    add(&mut board, "C", TaskStatus::Todo)?;
    let d = add(&mut board, "D", TaskStatus::Doing)?;
    add(&mut board, "E", TaskStatus::Todo)?;

    let plan = board.apply_drop(&a.to_string(), Some(&d.to_string()));

    ensure!(
        plan == DropPlan::Reassign {
            task_id: a,
            status: TaskStatus::Doing,
        }
    );
    ensure!(column_titles(&board, TaskStatus::Todo) == ["C", "E"]);
    ensure!(column_titles(&board, TaskStatus::Doing) == ["A", "B", "D"]);
    Ok(())
}

#[rstest]
fn same_column_drag_sequence_reorders_without_history(
    storage: InMemoryKeyValueStorage,
) -> eyre::Result<()> {
    let mut board = open(&storage)?;
    let a = add(&mut board, "A", TaskStatus::Done)?;
    let b = add(&mut board, "B", TaskStatus::Done)?;
    let c = add(&mut board, "C", TaskStatus::Done)?;

    board.apply_drop(&c.to_string(), Some(&a.to_string()));
    ensure!(column_titles(&board, TaskStatus::Done) == ["C", "A", "B"]);
    board.apply_drop(&c.to_string(), Some(&b.to_string()));
    ensure!(column_titles(&board, TaskStatus::Done) == ["A", "C", "B"]);

    ensure!(
        board
            .activities()
            .iter()
            .all(|entry| entry.action() == ActivityAction::Create)
    );
    let reopened = open(&storage)?;
    ensure!(column_titles(&reopened, TaskStatus::Done) == ["A", "C", "B"]);
    Ok(())
}

#[rstest]
fn moved_task_keeps_its_sequence_position_in_new_column(
    storage: InMemoryKeyValueStorage,
) -> eyre::Result<()> {
    let mut board = open(&storage)?;
    let early = add(&mut board, "Early", TaskStatus::Todo)?;
    add(&mut board, "Middle", TaskStatus::Doing)?;
    add(&mut board, "Late", TaskStatus::Doing)?;

    board.apply_drop(&early.to_string(), Some("doing"));

    ensure!(column_titles(&board, TaskStatus::Doing) == ["Early", "Middle", "Late"]);
    Ok(())
}

#[rstest]
fn cancelled_gestures_write_nothing(storage: InMemoryKeyValueStorage) -> eyre::Result<()> {
    let mut board = open(&storage)?;
    let a = add(&mut board, "A", TaskStatus::Todo)?;
    let history = board.activities().to_vec();

    ensure!(board.apply_drop(&a.to_string(), None) == DropPlan::Cancel);
    ensure!(board.apply_drop(&a.to_string(), Some(&a.to_string())) == DropPlan::Cancel);
    ensure!(board.apply_drop("", Some("done")) == DropPlan::Cancel);

    ensure!(board.activities() == history.as_slice());
    ensure!(column_titles(&board, TaskStatus::Todo) == ["A"]);
    Ok(())
}
