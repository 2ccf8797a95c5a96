//! Local persistence: a SQLite-backed key-value store standing in for
//! browser storage, plus the internal audit log.

pub mod initialize;
pub mod log;
pub mod pool;
pub mod storage;

pub use storage::{MemoryStorage, SqliteStorage, Storage};
