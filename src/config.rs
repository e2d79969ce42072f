// Runtime settings.
// Resolved from command-line flags, falling back to environment variables.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, ValueEnum};
use tracing::warn;

use crate::cache::{self, Cache};

/// Where cached enrichment data is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CacheBackendKind {
    /// JSON files shared by the server and the refresh command.
    #[default]
    File,
    /// Process memory, lost on restart.
    Memory,
}

/// Settings shared by every subcommand.
#[derive(Debug, Clone, Args)]
pub struct Settings {
    /// GitHub account whose public repositories are listed.
    #[arg(long, env = "PORTFOLIO_GITHUB_USERNAME", default_value = "Dprimc", global = true)]
    pub github_username: String,

    /// Token for authenticated GitHub requests (higher rate limit).
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true, global = true)]
    pub github_token: Option<String>,

    /// Channel whose uploads are featured. Without it the fallback videos are shown.
    #[arg(long, env = "PORTFOLIO_YOUTUBE_CHANNEL_ID", global = true)]
    pub youtube_channel_id: Option<String>,

    /// Seconds enrichment data stays cached.
    #[arg(long, env = "CACHE_TIMEOUT", default_value_t = 86_400, global = true)]
    pub cache_timeout: u64,

    #[arg(long, env = "PORTFOLIO_CACHE_BACKEND", value_enum, default_value_t = CacheBackendKind::File, global = true)]
    pub cache_backend: CacheBackendKind,

    /// Directory for the file cache. Defaults to the platform cache directory.
    #[arg(long, env = "PORTFOLIO_CACHE_DIR", global = true)]
    pub cache_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            github_username: "Dprimc".to_string(),
            github_token: None,
            youtube_channel_id: None,
            cache_timeout: cache::DEFAULT_TTL.as_secs(),
            cache_backend: CacheBackendKind::default(),
            cache_dir: None,
        }
    }
}

impl Settings {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_timeout)
    }

    /// Open the configured cache. A file cache without a usable directory
    /// falls back to memory.
    pub fn build_cache(&self) -> Cache {
        match self.cache_backend {
            CacheBackendKind::Memory => Cache::memory(self.cache_ttl()),
            CacheBackendKind::File => match self.cache_dir.clone().or_else(cache::cache_dir) {
                Some(dir) => Cache::file(dir, self.cache_ttl()),
                None => {
                    warn!("no cache directory available, caching in memory");
                    Cache::memory(self.cache_ttl())
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.cache_ttl(), Duration::from_secs(86_400));
        assert_eq!(settings.cache_backend, CacheBackendKind::File);
    }

    #[test]
    fn test_build_file_cache_in_configured_dir() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings {
            cache_dir: Some(temp_dir.path().to_path_buf()),
            cache_timeout: 60,
            ..Settings::default()
        };

        let cache = settings.build_cache();
        assert_eq!(cache.default_ttl(), Duration::from_secs(60));

        cache.set("github_projects:6", &vec!["a"]);
        assert!(temp_dir.path().join("github_projects_6.json").exists());
    }
}
