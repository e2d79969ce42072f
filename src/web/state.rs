// Shared application state.
// Holds the upstream clients and the cache used by every request.

use std::sync::Arc;

use crate::cache::Cache;
use crate::config::Settings;
use crate::content::PageContext;
use crate::error::Result;
use crate::github::{self, GitHubClient};
use crate::youtube::{self, YouTubeClient};

/// Videos shown in the featured section.
pub const FEATURED_VIDEO_LIMIT: usize = 3;
/// Repositories shown in the open source section.
pub const GITHUB_PROJECT_LIMIT: usize = 6;

#[derive(Debug, Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub cache: Cache,
    pub github: GitHubClient,
    pub youtube: YouTubeClient,
}

impl AppState {
    pub fn new(settings: Settings) -> Result<Self> {
        let cache = settings.build_cache();
        let github = GitHubClient::new(settings.github_token.as_deref())?;
        let youtube = YouTubeClient::new()?;

        Ok(Self::with_clients(settings, cache, github, youtube))
    }

    pub fn with_clients(
        settings: Settings,
        cache: Cache,
        github: GitHubClient,
        youtube: YouTubeClient,
    ) -> Self {
        Self {
            settings: Arc::new(settings),
            cache,
            github,
            youtube,
        }
    }

    /// Gather the home page data. Enrichment lookups run one after the other
    /// and always produce a list, possibly a fallback or an empty one.
    pub async fn page_context(&self) -> PageContext {
        let videos = youtube::list_latest_videos(
            &self.youtube,
            &self.cache,
            self.settings.youtube_channel_id.as_deref(),
            FEATURED_VIDEO_LIMIT,
        )
        .await;

        let projects = github::list_public_repositories(
            &self.github,
            &self.cache,
            &self.settings.github_username,
            GITHUB_PROJECT_LIMIT,
            false,
        )
        .await;

        PageContext::new(videos, projects)
    }
}
