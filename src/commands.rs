// Administrative commands.
// Warms caches outside of a page request.

use console::style;
use tracing::info;

use crate::cache::Cache;
use crate::github::{self, GitHubClient};

/// Result of a project cache refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The limit was zero or negative.
    NothingToRefresh,
    Cached(usize),
    /// The fetch produced nothing to cache.
    Empty,
}

impl RefreshOutcome {
    pub fn message(&self) -> String {
        match self {
            RefreshOutcome::NothingToRefresh => "Limit is 0; nothing to refresh.".to_string(),
            RefreshOutcome::Cached(count) => format!(
                "Cached {} GitHub project{}.",
                count,
                if *count == 1 { "" } else { "s" }
            ),
            RefreshOutcome::Empty => {
                "No GitHub projects were cached. Verify API availability and repository visibility."
                    .to_string()
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RefreshOutcome::Cached(_))
    }

    /// Print the outcome to stdout, styled as success or warning.
    pub fn report(&self) {
        let message = self.message();
        if self.is_success() {
            println!("{}", style(message).green());
        } else {
            println!("{}", style(message).yellow());
        }
    }
}

/// Force a fresh fetch of the project list and store it for `limit`.
pub async fn refresh_github_projects(
    client: &GitHubClient,
    cache: &Cache,
    username: &str,
    limit: i64,
) -> RefreshOutcome {
    let limit = usize::try_from(limit.max(0)).unwrap_or(0);
    if limit == 0 {
        return RefreshOutcome::NothingToRefresh;
    }

    info!(username, limit, "refreshing GitHub projects");
    let projects = github::list_public_repositories(client, cache, username, limit, true).await;

    if projects.is_empty() {
        RefreshOutcome::Empty
    } else {
        RefreshOutcome::Cached(projects.len())
    }
}
