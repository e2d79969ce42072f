// YouTube HTTP client.
// Fetches channel feeds and watch pages; no API key involved.

use reqwest::{Client, header::HeaderMap};

use crate::error::Result;
use crate::http;

pub const YOUTUBE_BASE: &str = "https://www.youtube.com";

#[derive(Debug, Clone)]
pub struct YouTubeClient {
    client: Client,
    feed_base: String,
    video_base: String,
}

impl YouTubeClient {
    pub fn new() -> Result<Self> {
        Self::with_base_urls(YOUTUBE_BASE, YOUTUBE_BASE)
    }

    /// Create a client whose feed and watch pages live on the given hosts.
    pub fn with_base_urls(feed_base: &str, video_base: &str) -> Result<Self> {
        let client = http::client_builder(HeaderMap::new()).build()?;

        Ok(Self {
            client,
            feed_base: feed_base.trim_end_matches('/').to_string(),
            video_base: video_base.trim_end_matches('/').to_string(),
        })
    }

    /// Get the Atom feed of a channel's recent uploads.
    pub async fn get_feed(&self, channel_id: &str) -> Result<String> {
        let url = format!("{}/feeds/videos.xml", self.feed_base);
        http::get_text(&self.client, &url, &[("channel_id", channel_id)]).await
    }

    /// Get the HTML of a video's watch page.
    pub async fn get_watch_page(&self, video_id: &str) -> Result<String> {
        let url = format!("{}/watch", self.video_base);
        http::get_text(&self.client, &url, &[("v", video_id)]).await
    }
}
