//! File-backed storage for the engine.

mod atomic_kv;
mod file_storage;

pub use atomic_kv::{AtomicKvFile, KvMap};
pub use file_storage::FileStorage;
