// Channel feed parsing.
// Extracts video ids, titles and publish dates from the uploads Atom feed.

use chrono::{DateTime, Utc};
use roxmltree::{Document, Node};

use crate::error::Result;

/// Number of most recent uploads inspected per refresh.
pub const CANDIDATE_COUNT: usize = 10;

/// One upload listed in the channel feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    pub video_id: String,
    pub title: String,
    /// Publish timestamp as written in the feed.
    pub published: String,
}

impl FeedEntry {
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        parse_published(&self.published)
    }
}

/// Parse a feed document. Entries without a video id are skipped.
pub fn parse_feed(xml: &str) -> Result<Vec<FeedEntry>> {
    let doc = Document::parse(xml)?;

    let entries = doc
        .descendants()
        .filter(|node| node.has_tag_name("entry"))
        .filter_map(|node| {
            let video_id = child_text(&node, "videoId")?;
            Some(FeedEntry {
                video_id,
                title: child_text(&node, "title").unwrap_or_default(),
                published: child_text(&node, "published").unwrap_or_default(),
            })
        })
        .collect();

    Ok(entries)
}

/// Keep the `count` most recently published entries, newest first.
/// Entries with an unreadable date sort last.
pub fn newest(mut entries: Vec<FeedEntry>, count: usize) -> Vec<FeedEntry> {
    entries.sort_by_key(|entry| std::cmp::Reverse(entry.published_at()));
    entries.truncate(count);
    entries
}

pub fn parse_published(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn child_text(node: &Node<'_, '_>, name: &str) -> Option<String> {
    node.children()
        .filter(|child| child.is_element() && child.tag_name().name() == name)
        .filter_map(|child| child.text())
        .map(str::trim)
        .find(|text| !text.is_empty())
        .map(str::to_string)
}
