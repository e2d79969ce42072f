// Typed cache facade used by the enrichment lookups.
// Storage failures are logged and degrade to a miss; they never reach the page.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use super::backend::{CacheBackend, FileCache, MemoryCache};
use super::store::CachedData;

/// Process-wide key-value cache with a default time-to-live.
#[derive(Clone)]
pub struct Cache {
    backend: Arc<dyn CacheBackend>,
    default_ttl: Duration,
}

impl Cache {
    pub fn new(backend: Arc<dyn CacheBackend>, default_ttl: Duration) -> Self {
        Self {
            backend,
            default_ttl,
        }
    }

    /// Cache held in process memory.
    pub fn memory(default_ttl: Duration) -> Self {
        Self::new(Arc::new(MemoryCache::new()), default_ttl)
    }

    /// Cache persisted as JSON files under `dir`.
    pub fn file(dir: impl Into<PathBuf>, default_ttl: Duration) -> Self {
        Self::new(Arc::new(FileCache::new(dir)), default_ttl)
    }

    #[cfg(test)]
    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Fetch a live entry. Expired or unreadable entries are evicted and read as absent.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let entry = match self.backend.get(key) {
            Ok(Some(entry)) => entry,
            Ok(None) => return None,
            Err(error) => {
                warn!(key, kind = ?error.kind(), %error, "cache read failed");
                return None;
            }
        };

        if entry.is_expired() {
            debug!(key, "cache entry expired");
            self.delete(key);
            return None;
        }

        match serde_json::from_value(entry.data) {
            Ok(value) => Some(value),
            Err(error) => {
                warn!(key, %error, "cache entry has an unexpected shape, evicting");
                self.delete(key);
                None
            }
        }
    }

    /// Store a value under the default TTL.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) {
        self.set_with_ttl(key, value, Some(self.default_ttl));
    }

    /// Store a value with an explicit TTL. `None` keeps it until deleted.
    pub fn set_with_ttl<T: Serialize>(&self, key: &str, value: &T, ttl: Option<Duration>) {
        let data = match serde_json::to_value(value) {
            Ok(data) => data,
            Err(error) => {
                warn!(key, %error, "cache value could not be serialized");
                return;
            }
        };

        if let Err(error) = self.backend.set(key, CachedData::new(data, ttl)) {
            warn!(key, kind = ?error.kind(), %error, "cache write failed");
        }
    }

    pub fn delete(&self, key: &str) {
        if let Err(error) = self.backend.delete(key) {
            warn!(key, kind = ?error.kind(), %error, "cache delete failed");
        }
    }

    /// Whether a live entry exists for `key`.
    #[cfg(test)]
    pub fn contains(&self, key: &str) -> bool {
        self.get::<serde_json::Value>(key).is_some()
    }
}

impl std::fmt::Debug for Cache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cache")
            .field("default_ttl", &self.default_ttl)
            .finish_non_exhaustive()
    }
}
