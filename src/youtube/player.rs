// Watch page inspection.
// Reads the embedded player response to tell long-form uploads from shorts and streams.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Deserializer, Map, Value};

use crate::error::{PortfolioError, Result};

/// Uploads at least this long are featured first.
pub const PRIMARY_MIN_SECONDS: u64 = 120;
/// Uploads at least this long fill remaining slots.
pub const BACKUP_MIN_SECONDS: u64 = 60;

static PLAYER_RESPONSE_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"ytInitialPlayerResponse\s*=\s*\{").expect("Failed to compile player response regex")
});

/// Properties of a video read from its watch page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerDetails {
    pub title: Option<String>,
    pub length_seconds: u64,
    pub is_live: bool,
    pub is_short: bool,
    /// Highest resolution thumbnail offered.
    pub thumbnail: Option<String>,
}

/// Where a video lands in the featured list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Primary,
    Backup,
}

impl PlayerDetails {
    /// Parse the player response embedded in a watch page.
    pub fn from_watch_page(html: &str) -> Result<Self> {
        let response = extract_player_response(html)?;
        Self::from_player_response(&response)
    }

    pub fn from_player_response(response: &Value) -> Result<Self> {
        let details = response
            .get("videoDetails")
            .filter(|d| d.is_object())
            .ok_or(PortfolioError::MissingField("videoDetails"))?;

        let flag = |field: &str| details.get(field).and_then(Value::as_bool).unwrap_or(false);

        let length_seconds = match details.get("lengthSeconds") {
            Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
            Some(value) => value.as_u64().unwrap_or(0),
            None => 0,
        };

        let thumbnail = details
            .pointer("/thumbnail/thumbnails")
            .and_then(Value::as_array)
            .and_then(|thumbs| {
                thumbs
                    .iter()
                    .rev()
                    .find_map(|t| t.get("url").and_then(Value::as_str))
            })
            .map(str::to_string);

        Ok(Self {
            title: details
                .get("title")
                .and_then(Value::as_str)
                .map(str::to_string),
            length_seconds,
            is_live: flag("isLiveContent"),
            is_short: flag("isShortsEligible") || flag("isShortsVideo"),
            thumbnail,
        })
    }

    /// Classify for the featured list. Streams, shorts and clips under a
    /// minute are not featured.
    pub fn tier(&self) -> Option<Tier> {
        if self.is_live || self.is_short {
            return None;
        }
        match self.length_seconds {
            s if s >= PRIMARY_MIN_SECONDS => Some(Tier::Primary),
            s if s >= BACKUP_MIN_SECONDS => Some(Tier::Backup),
            _ => None,
        }
    }
}

/// Locate `ytInitialPlayerResponse = {...};` and decode the object.
/// Assignments of anything other than an object literal are skipped, and only the
/// object itself is read, so trailing script is ignored.
pub fn extract_player_response(html: &str) -> Result<Value> {
    let marker = PLAYER_RESPONSE_MARKER
        .find(html)
        .ok_or(PortfolioError::MissingField("ytInitialPlayerResponse"))?;

    // Decode from the opening brace the marker ends on.
    let rest = &html[marker.end() - 1..];
    let object = Deserializer::from_str(rest)
        .into_iter::<Map<String, Value>>()
        .next()
        .ok_or_else(|| PortfolioError::Parse("empty player response".to_string()))??;

    Ok(Value::Object(object))
}
