//! Filtered board view tests.

use crate::in_memory::helpers::{open, storage};
use eyre::ensure;
use kanban::board::{
    adapters::memory::InMemoryKeyValueStorage,
    domain::{Priority, TaskFields, TaskStatus},
    services::{PriorityFilter, TaskFilter},
};
use rstest::rstest;

#[rstest]
fn view_filters_then_partitions_in_board_order(
    storage: InMemoryKeyValueStorage,
) -> eyre::Result<()> {
    let mut board = open(&storage)?;
    for (title, priority, status) in [
        ("Design API", Priority::High, TaskStatus::Todo),
        ("Design logo", Priority::Low, TaskStatus::Todo),
        ("Implement API", Priority::High, TaskStatus::Doing),
        ("Publish API docs", Priority::Medium, TaskStatus::Done),
        ("api smoke test", Priority::High, TaskStatus::Todo),
    ] {
        board.create_task(TaskFields::new(title).with_priority(priority), status)?;
    }

    let filter = TaskFilter::new()
        .with_search("Api")
        .with_priority(PriorityFilter::Only(Priority::High));
    let view = board.view(&filter);

    let titles = |status: TaskStatus| {
        view.get(status)
            .iter()
            .map(|task| task.title().as_str())
            .collect::<Vec<_>>()
    };
    ensure!(titles(TaskStatus::Todo) == ["Design API", "api smoke test"]);
    ensure!(titles(TaskStatus::Doing) == ["Implement API"]);
    ensure!(titles(TaskStatus::Done).is_empty());
    ensure!(view.len() == 3);
    Ok(())
}
