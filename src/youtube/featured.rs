// Featured video selection.
// Picks the newest long-form uploads for the home page, caching the result
// and falling back to a fixed list when the feed cannot be read.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cache::Cache;
use crate::error::Result;

use super::client::YouTubeClient;
use super::feed::{self, CANDIDATE_COUNT, FeedEntry};
use super::player::{PlayerDetails, Tier};

/// Video shown in the featured section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedVideo {
    pub title: String,
    pub url: String,
    pub thumbnail: String,
}

impl FeaturedVideo {
    fn from_id(video_id: &str, title: &str, thumbnail: Option<String>) -> Self {
        Self {
            title: title.to_string(),
            url: watch_url(video_id),
            thumbnail: thumbnail.unwrap_or_else(|| thumbnail_url(video_id)),
        }
    }
}

/// Shown when the channel feed is unavailable.
const FALLBACK_VIDEOS: &[(&str, &str)] = &[
    ("wxXu5NXdUzw", "Azure AD Conditional Access Explained"),
    ("bURtVxifUUo", "Datto RMM Tips for MSP Engineers"),
    ("urBEXzYkD7A", "Deploying Intune Endpoint Security Policies"),
];

pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}

pub fn thumbnail_url(video_id: &str) -> String {
    format!("https://i.ytimg.com/vi/{}/hqdefault.jpg", video_id)
}

pub fn cache_key(limit: usize) -> String {
    format!("youtube_videos:{}", limit)
}

/// The fixed fallback list truncated to `limit`.
pub fn fallback_videos(limit: usize) -> Vec<FeaturedVideo> {
    FALLBACK_VIDEOS
        .iter()
        .take(limit)
        .map(|(id, title)| FeaturedVideo::from_id(id, title, None))
        .collect()
}

/// List up to `limit` recent long-form uploads, newest first.
///
/// Live results are cached for the cache's default TTL. When the feed cannot
/// be fetched or yields nothing eligible, the fallback list is returned and
/// nothing is cached.
pub async fn list_latest_videos(
    client: &YouTubeClient,
    cache: &Cache,
    channel_id: Option<&str>,
    limit: usize,
) -> Vec<FeaturedVideo> {
    if limit == 0 {
        return Vec::new();
    }

    let Some(channel_id) = channel_id.map(str::trim).filter(|id| !id.is_empty()) else {
        debug!("no YouTube channel configured, using fallback videos");
        return fallback_videos(limit);
    };

    let key = cache_key(limit);
    if let Some(videos) = cache.get::<Vec<FeaturedVideo>>(&key) {
        debug!(key = %key, count = videos.len(), "serving cached videos");
        return videos;
    }

    match fetch_featured(client, channel_id, limit).await {
        Ok(videos) if !videos.is_empty() => {
            cache.set(&key, &videos);
            videos
        }
        Ok(_) => {
            info!(channel_id, "feed had no eligible videos, using fallback videos");
            fallback_videos(limit)
        }
        Err(error) => {
            warn!(channel_id, kind = ?error.kind(), %error, "failed to read YouTube feed");
            fallback_videos(limit)
        }
    }
}

/// Read the feed and inspect the newest uploads.
///
/// Feed-level failures are returned; a watch page that cannot be fetched or
/// parsed only drops that video.
async fn fetch_featured(
    client: &YouTubeClient,
    channel_id: &str,
    limit: usize,
) -> Result<Vec<FeaturedVideo>> {
    let xml = client.get_feed(channel_id).await?;
    let entries = feed::newest(feed::parse_feed(&xml)?, CANDIDATE_COUNT);

    let mut primary = Vec::new();
    let mut backup = Vec::new();

    for entry in entries {
        if primary.len() >= limit {
            break;
        }

        let details = match client.get_watch_page(&entry.video_id).await {
            Ok(html) => PlayerDetails::from_watch_page(&html),
            Err(error) => Err(error),
        };
        let details = match details {
            Ok(details) => details,
            Err(error) => {
                debug!(video_id = %entry.video_id, kind = ?error.kind(), %error, "skipping video");
                continue;
            }
        };

        match details.tier() {
            Some(Tier::Primary) => primary.push((entry, details)),
            Some(Tier::Backup) => backup.push((entry, details)),
            None => debug!(video_id = %entry.video_id, "video is live, a short, or too brief"),
        }
    }

    Ok(select(primary, backup, limit))
}

/// Fill up to `limit` slots from primary candidates, then backups, and order
/// the result newest first. Publish dates are dropped from the output.
fn select(
    primary: Vec<(FeedEntry, PlayerDetails)>,
    backup: Vec<(FeedEntry, PlayerDetails)>,
    limit: usize,
) -> Vec<FeaturedVideo> {
    let mut seen = HashSet::new();
    let mut chosen: Vec<(FeedEntry, PlayerDetails)> = Vec::with_capacity(limit);

    for candidate in primary.into_iter().chain(backup) {
        if chosen.len() >= limit {
            break;
        }
        if seen.insert(candidate.0.video_id.clone()) {
            chosen.push(candidate);
        }
    }

    chosen.sort_by_key(|(entry, _)| std::cmp::Reverse(entry.published_at()));

    chosen
        .into_iter()
        .map(|(entry, details)| {
            let title = if entry.title.is_empty() {
                details.title.unwrap_or_default()
            } else {
                entry.title
            };
            FeaturedVideo::from_id(&entry.video_id, &title, details.thumbnail)
        })
        .collect()
}
