// YouTube module.
// Feed parsing, watch page inspection and the cached featured video list.

pub mod client;
pub mod featured;
pub mod feed;
pub mod player;

pub use client::YouTubeClient;
pub use featured::{FeaturedVideo, list_latest_videos};
