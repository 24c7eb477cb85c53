//! Shared fixtures for board unit tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;

use crate::board::{
    adapters::memory::{InMemoryKeyValueStorage, StaticSession},
    services::{BoardConfig, BoardStore},
};

/// Clock that advances one second on every reading.
#[derive(Debug)]
pub struct StepClock {
    start: DateTime<Utc>,
    ticks: AtomicI64,
}

impl StepClock {
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            start,
            ticks: AtomicI64::new(0),
        }
    }
}

impl Clock for StepClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.start + TimeDelta::seconds(tick)
    }
}

pub type TestBoard = BoardStore<InMemoryKeyValueStorage, StepClock>;

pub fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("valid calendar date")
}

#[fixture]
pub fn clock() -> StepClock {
    StepClock::starting_at(date(2024, 3, 1))
}

#[fixture]
pub fn storage() -> InMemoryKeyValueStorage {
    InMemoryKeyValueStorage::new()
}

pub fn open_board(storage: &InMemoryKeyValueStorage) -> TestBoard {
    BoardStore::open(
        Arc::new(storage.clone()),
        Arc::new(StepClock::starting_at(date(2024, 3, 1))),
        BoardConfig::default(),
        &StaticSession::signed_in(),
    )
    .expect("signed-in session opens the board")
}

#[fixture]
pub fn board(storage: InMemoryKeyValueStorage) -> TestBoard {
    open_board(&storage)
}
