//! In-memory adapters for board ports.

mod session;
mod storage;

pub use session::StaticSession;
pub use storage::InMemoryKeyValueStorage;
