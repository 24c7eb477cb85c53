//! Port contracts for the task board.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod session;
pub mod storage;

pub use session::SessionGate;
pub use storage::{KeyValueStorage, StorageError, StorageResult};
