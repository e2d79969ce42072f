// Cache storage backends.
// A process-local map for a single server, a directory of JSON files when
// the refresh command and the server must share entries.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use serde_json::Value;

use crate::error::Result;

use super::paths::entry_path;
use super::store::{self, CachedData};

/// Raw key-value storage. Expiry is interpreted by the caller.
pub trait CacheBackend: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<CachedData<Value>>>;
    fn set(&self, key: &str, entry: CachedData<Value>) -> Result<()>;
    fn delete(&self, key: &str) -> Result<()>;
}

/// In-process cache shared by every request handler.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, CachedData<Value>>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, CachedData<Value>>> {
        // A panicked writer leaves whole entries behind, never partial ones
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl CacheBackend for MemoryCache {
    fn get(&self, key: &str) -> Result<Option<CachedData<Value>>> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, entry: CachedData<Value>) -> Result<()> {
        self.entries().insert(key.to_string(), entry);
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.entries().remove(key);
        Ok(())
    }
}

/// One JSON file per key under a cache directory.
#[derive(Debug, Clone)]
pub struct FileCache {
    dir: PathBuf,
}

impl FileCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl CacheBackend for FileCache {
    fn get(&self, key: &str) -> Result<Option<CachedData<Value>>> {
        store::read_cached(&entry_path(&self.dir, key))
    }

    fn set(&self, key: &str, entry: CachedData<Value>) -> Result<()> {
        store::write_cached(&entry_path(&self.dir, key), &entry)
    }

    fn delete(&self, key: &str) -> Result<()> {
        store::delete(&entry_path(&self.dir, key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn exercise(backend: &dyn CacheBackend) {
        assert!(backend.get("github_projects:6").unwrap().is_none());

        backend
            .set("github_projects:6", CachedData::new(json!(["a", "b"]), None))
            .unwrap();
        let entry = backend.get("github_projects:6").unwrap().unwrap();
        assert_eq!(entry.data, json!(["a", "b"]));

        backend
            .set("github_projects:6", CachedData::new(json!(["c"]), None))
            .unwrap();
        let entry = backend.get("github_projects:6").unwrap().unwrap();
        assert_eq!(entry.data, json!(["c"]));

        backend.delete("github_projects:6").unwrap();
        assert!(backend.get("github_projects:6").unwrap().is_none());
    }

    #[test]
    fn test_memory_backend() {
        exercise(&MemoryCache::new());
    }

    #[test]
    fn test_file_backend() {
        let temp_dir = TempDir::new().unwrap();
        exercise(&FileCache::new(temp_dir.path()));
    }

    #[test]
    fn test_file_backend_is_shared_between_instances() {
        let temp_dir = TempDir::new().unwrap();
        let writer = FileCache::new(temp_dir.path());
        let reader = FileCache::new(temp_dir.path());

        writer
            .set("youtube_videos:3", CachedData::new(json!([1, 2, 3]), None))
            .unwrap();
        let entry = reader.get("youtube_videos:3").unwrap().unwrap();
        assert_eq!(entry.data, json!([1, 2, 3]));
    }

    #[test]
    fn test_file_backend_reports_corrupt_entries() {
        let temp_dir = TempDir::new().unwrap();
        let backend = FileCache::new(temp_dir.path());
        std::fs::write(entry_path(temp_dir.path(), "broken"), "not json").unwrap();

        assert!(backend.get("broken").is_err());
    }
}
