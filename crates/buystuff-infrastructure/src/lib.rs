//! Durable storage infrastructure for the BuyStuff engine.
//!
//! Provides the file-backed implementation of the core crate's
//! `KeyValueStorage` boundary: an atomic TOML key-value file that survives
//! process restarts, plus platform path resolution for its default location.

pub mod paths;
pub mod storage;

pub use crate::storage::{AtomicKvFile, FileStorage};
