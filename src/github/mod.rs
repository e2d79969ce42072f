// GitHub API module.
// Provides the REST client and the cached public repository listing.

pub mod client;
pub mod endpoints;
pub mod projects;
pub mod types;

pub use client::GitHubClient;
pub use projects::list_public_repositories;
pub use types::RepositoryEntry;
