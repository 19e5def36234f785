//! Atomic key-value file operations.
//!
//! A thin layer for safe access to the store file: the whole key-value map
//! is serialized as TOML and replaced in one atomic step.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

use buystuff_core::error::{BuystuffError, Result};

/// The on-disk shape of the store: a flat map of textual records.
///
/// A `BTreeMap` keeps the serialized file in a stable key order.
pub type KvMap = BTreeMap<String, String>;

/// A handle to an atomic key-value file.
///
/// Writes go to a temporary file in the same directory, are fsynced, and
/// atomically renamed over the target, so the store file is always either
/// the previous or the new complete map, never a torn write.
pub struct AtomicKvFile {
    path: PathBuf,
}

impl AtomicKvFile {
    /// Creates a handle for the file at `path`. Nothing is touched on disk.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The path this handle writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and parses the store file.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(map))`: Successfully loaded and parsed
    /// - `Ok(None)`: File doesn't exist or is empty
    /// - `Err`: Failed to read or parse the file
    pub fn load(&self) -> Result<Option<KvMap>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;

        if content.trim().is_empty() {
            return Ok(None);
        }

        let map: KvMap = toml::from_str(&content)?;
        Ok(Some(map))
    }

    /// Saves the full map atomically, creating parent directories as needed.
    pub fn save(&self, map: &KvMap) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let serialized = toml::to_string_pretty(map)?;

        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(serialized.as_bytes())?;

        // Ensure data is on disk before the rename makes it visible.
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    fn temp_path(&self) -> Result<PathBuf> {
        let parent = self
            .path
            .parent()
            .ok_or_else(|| BuystuffError::internal("store path has no parent directory"))?;

        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| BuystuffError::internal("store path has no file name"))?;

        let tmp_name = format!(".{}.tmp", file_name.to_string_lossy());
        Ok(parent.join(tmp_name))
    }
}
