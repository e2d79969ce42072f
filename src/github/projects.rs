// Cached public repository listing for the projects section.
// Serves stale data when a refresh fails and never caches an empty list.

use tracing::{debug, info, warn};

use crate::cache::Cache;

use super::client::GitHubClient;
use super::types::RepositoryEntry;

/// Cache key for a listing of `limit` repositories.
pub fn cache_key(limit: usize) -> String {
    format!("github_projects:{}", limit)
}

/// List up to `limit` public, non-fork, non-archived repositories.
///
/// A live cache entry wins unless `force_refresh` is set. A failed or empty
/// fetch falls back to whatever the cache still holds for the key; if there
/// is nothing to fall back to the key is evicted.
pub async fn list_public_repositories(
    client: &GitHubClient,
    cache: &Cache,
    username: &str,
    limit: usize,
    force_refresh: bool,
) -> Vec<RepositoryEntry> {
    if limit == 0 {
        return Vec::new();
    }

    let key = cache_key(limit);
    let cached = match cache.get::<Vec<RepositoryEntry>>(&key) {
        Some(projects) if !force_refresh => {
            debug!(key = %key, count = projects.len(), "serving cached projects");
            return projects;
        }
        other => other,
    };

    let fresh = fetch_projects(client, username, limit).await;
    if !fresh.is_empty() {
        cache.set(&key, &fresh);
        return fresh;
    }

    match cached {
        Some(projects) => {
            info!(key = %key, count = projects.len(), "refresh returned nothing, serving stale projects");
            projects
        }
        None => {
            cache.delete(&key);
            Vec::new()
        }
    }
}

/// Fetch and project repositories, bypassing the cache.
async fn fetch_projects(client: &GitHubClient, username: &str, limit: usize) -> Vec<RepositoryEntry> {
    let per_page = limit.saturating_mul(2).max(limit);

    let repos = match client.get_user_repos(username, per_page).await {
        Ok(repos) => repos,
        Err(error) => {
            warn!(username, kind = ?error.kind(), %error, "failed to fetch GitHub repositories");
            return Vec::new();
        }
    };

    repos
        .iter()
        .filter_map(RepositoryEntry::from_api)
        .take(limit)
        .collect()
}
