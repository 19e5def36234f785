//! File-backed key-value storage adapter.

use std::path::PathBuf;
use std::sync::Mutex;

use buystuff_core::error::{BuystuffError, Result};
use buystuff_core::storage::KeyValueStorage;

use crate::paths::BuystuffPaths;
use crate::storage::atomic_kv::{AtomicKvFile, KvMap};

/// Durable `KeyValueStorage` backed by an atomic TOML file.
///
/// The map is read once at open and cached in memory; every mutation updates
/// the cache and writes the full map back through [`AtomicKvFile`], so the
/// on-disk store always reflects the last completed mutation.
pub struct FileStorage {
    file: AtomicKvFile,
    cache: Mutex<KvMap>,
}

impl FileStorage {
    /// Opens the store at `path`, creating an empty one on first use.
    ///
    /// A store file that exists but fails to parse is discarded with a
    /// warning and replaced by an empty map on the next write; hard read
    /// failures (permissions and the like) are returned to the caller.
    pub fn open(path: PathBuf) -> Result<Self> {
        let file = AtomicKvFile::new(path);

        let cache = match file.load() {
            Ok(Some(map)) => map,
            Ok(None) => KvMap::new(),
            Err(err) if err.is_serialization() => {
                tracing::warn!(path = %file.path().display(), %err, "discarding unparseable store file");
                KvMap::new()
            }
            Err(err) => return Err(err),
        };

        Ok(Self {
            file,
            cache: Mutex::new(cache),
        })
    }

    /// Opens the store at the platform default location
    /// (`<config dir>/buystuff/store.toml`).
    pub fn at_default_location() -> Result<Self> {
        let path = BuystuffPaths::store_file().map_err(|err| BuystuffError::io(err.to_string()))?;
        Self::open(path)
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.cache
            .lock()
            .expect("file storage lock poisoned")
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut cache = self.cache.lock().expect("file storage lock poisoned");
        cache.insert(key.to_string(), value.to_string());
        self.file.save(&cache)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut cache = self.cache.lock().expect("file storage lock poisoned");
        if cache.remove(key).is_none() {
            return Ok(());
        }
        self.file.save(&cache)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn open_in(dir: &TempDir) -> FileStorage {
        FileStorage::open(dir.path().join("store.toml")).unwrap()
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let storage = open_in(&dir);
        assert_eq!(storage.get("auth.active"), None);
    }

    #[test]
    fn test_set_then_get() {
        let dir = TempDir::new().unwrap();
        let storage = open_in(&dir);
        storage.set("auth.active", "true").unwrap();
        assert_eq!(storage.get("auth.active"), Some("true".to_string()));
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = TempDir::new().unwrap();
        {
            let storage = open_in(&dir);
            storage.set("auth.identity", "admin").unwrap();
            storage.set("cart.items", "[]").unwrap();
        }

        let reopened = open_in(&dir);
        assert_eq!(reopened.get("auth.identity"), Some("admin".to_string()));
        assert_eq!(reopened.get("cart.items"), Some("[]".to_string()));
    }

    #[test]
    fn test_remove_deletes_record() {
        let dir = TempDir::new().unwrap();
        {
            let storage = open_in(&dir);
            storage.set("cart.items", "[]").unwrap();
            storage.remove("cart.items").unwrap();
        }

        let reopened = open_in(&dir);
        assert_eq!(reopened.get("cart.items"), None);
    }

    #[test]
    fn test_remove_absent_key_is_a_no_op() {
        let dir = TempDir::new().unwrap();
        let storage = open_in(&dir);
        storage.remove("cart.items").unwrap();
    }

    #[test]
    fn test_unparseable_store_file_opens_empty() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("store.toml"), "not = [valid").unwrap();

        let storage = open_in(&dir);
        assert_eq!(storage.get("auth.active"), None);

        // The next write replaces the broken file with a valid one.
        storage.set("auth.active", "true").unwrap();
        let reopened = open_in(&dir);
        assert_eq!(reopened.get("auth.active"), Some("true".to_string()));
    }
}
