// Cache module for enrichment data.
// Keeps fetched video and repository lists for a configurable time-to-live.

pub mod backend;
pub mod layer;
pub mod paths;
pub mod store;

pub use layer::Cache;
pub use paths::cache_dir;
pub use store::DEFAULT_TTL;
