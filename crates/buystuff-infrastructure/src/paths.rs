//! Path management for the BuyStuff store file.
//!
//! The durable store lives under the platform configuration directory, so
//! the persisted session and cart survive restarts the way an origin-scoped
//! browser store would.

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Path resolution for the engine's durable store.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/buystuff/          # Config directory (platform-dependent)
/// └── store.toml               # Key-value store file
/// ```
pub struct BuystuffPaths;

impl BuystuffPaths {
    /// Returns the buystuff configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to the config directory (e.g., `~/.config/buystuff/`)
    /// - `Err(PathError::ConfigDirNotFound)`: Could not determine the directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("buystuff"))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to the key-value store file.
    pub fn store_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("store.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_file_under_config_dir() {
        let store = BuystuffPaths::store_file().unwrap();
        assert!(store.ends_with("buystuff/store.toml"));
    }
}
