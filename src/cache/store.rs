// Cache entry envelope and JSON file storage.
// Handles TTL bookkeeping, serialization, and atomic filesystem writes.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tempfile::NamedTempFile;

use crate::error::Result;

/// Default lifetime of enrichment data: one day.
pub const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Wrapper for cached data with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedData<T> {
    /// The cached data.
    pub data: T,
    /// When the data was cached.
    pub cached_at: DateTime<Utc>,
    /// When the data stops being served. `None` never expires.
    pub expires_at: Option<DateTime<Utc>>,
}

impl<T> CachedData<T> {
    /// Create a new cached data entry that lives for `ttl`.
    pub fn new(data: T, ttl: Option<Duration>) -> Self {
        let cached_at = Utc::now();
        let expires_at = ttl.and_then(|ttl| {
            chrono::Duration::from_std(ttl)
                .ok()
                .and_then(|delta| cached_at.checked_add_signed(delta))
        });

        Self {
            data,
            cached_at,
            expires_at,
        }
    }

    /// Check if this cached data has expired.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Check expiry against an explicit clock reading.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires_at) => now >= expires_at,
            None => false,
        }
    }
}

/// Read a cached JSON entry from a file.
pub fn read_cached<T: DeserializeOwned>(path: &Path) -> Result<Option<CachedData<T>>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path)?;
    let cached: CachedData<T> = serde_json::from_str(&contents)?;
    Ok(Some(cached))
}

/// Write a cached entry to a file as JSON.
pub fn write_cached<T: Serialize>(path: &Path, cached: &CachedData<T>) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let json = serde_json::to_string_pretty(cached)?;

    // Write atomically via a uniquely named temp file; the server and the
    // refresh command may write the same key at once.
    let mut file = NamedTempFile::new_in(parent)?;
    file.write_all(json.as_bytes())?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;

    Ok(())
}

/// Delete a cached file.
pub fn delete(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct Project {
        name: String,
        stars: u64,
    }

    #[test]
    fn test_write_and_read_cached() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("projects.json");

        let data = vec![Project {
            name: "dotfiles".to_string(),
            stars: 3,
        }];

        write_cached(&path, &CachedData::new(data.clone(), Some(DEFAULT_TTL))).unwrap();

        let cached: CachedData<Vec<Project>> = read_cached(&path).unwrap().unwrap();
        assert_eq!(cached.data, data);
        assert!(!cached.is_expired());
        assert!(!path.with_extension("tmp").exists());
        let leftovers = fs::read_dir(path.parent().unwrap()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn test_concurrent_writers_leave_a_whole_entry() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("github_projects_6.json");

        let writers: Vec<_> = (0..8u64)
            .map(|stars| {
                let path = path.clone();
                std::thread::spawn(move || {
                    let data = vec![Project {
                        name: format!("repo-{}", stars),
                        stars,
                    }];
                    for _ in 0..20 {
                        write_cached(&path, &CachedData::new(data.clone(), Some(DEFAULT_TTL)))
                            .unwrap();
                    }
                })
            })
            .collect();
        for writer in writers {
            writer.join().unwrap();
        }

        let cached: CachedData<Vec<Project>> = read_cached(&path).unwrap().unwrap();
        assert_eq!(cached.data.len(), 1);
        assert_eq!(cached.data[0].name, format!("repo-{}", cached.data[0].stars));
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_without_ttl_never_expires() {
        let data = CachedData::new("video", None);
        let far_future = Utc::now() + chrono::Duration::days(365 * 50);

        assert!(data.expires_at.is_none());
        assert!(!data.is_expired_at(far_future));
    }

    #[test]
    fn test_expires_after_ttl() {
        let data = CachedData::new("video", Some(Duration::from_secs(300)));

        assert!(!data.is_expired_at(data.cached_at + chrono::Duration::seconds(299)));
        assert!(data.is_expired_at(data.cached_at + chrono::Duration::seconds(300)));
    }

    #[test]
    fn test_zero_ttl_is_immediately_expired() {
        let data = CachedData::new(1, Some(Duration::ZERO));
        assert!(data.is_expired());
    }

    #[test]
    fn test_read_nonexistent_and_delete() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        let cached: Option<CachedData<Project>> = read_cached(&path).unwrap();
        assert!(cached.is_none());

        // Deleting a missing entry is not an error
        delete(&path).unwrap();
    }
}
