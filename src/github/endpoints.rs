// GitHub API endpoint functions.
// Fetches raw repository listings for the projects section.

use serde_json::Value;

use crate::error::{PortfolioError, Result};
use crate::http;

use super::client::GitHubClient;

/// Largest page the repository listing endpoint will return.
pub const MAX_PER_PAGE: usize = 100;

impl GitHubClient {
    /// Get a user's public repositories, most recently updated first.
    ///
    /// The body is returned undecoded beyond JSON so the caller can skip
    /// individual malformed entries. A non-array payload (GitHub error
    /// objects look like `{"message": ...}`) is a shape failure.
    pub async fn get_user_repos(&self, username: &str, per_page: usize) -> Result<Vec<Value>> {
        let per_page = per_page.clamp(1, MAX_PER_PAGE).to_string();
        let params = [("sort", "updated"), ("per_page", per_page.as_str())];
        let response = self
            .get_with_params(&format!("/users/{}/repos", username), &params)
            .await?;

        let body = http::text_body(response).await?;
        match serde_json::from_str::<Value>(&body)? {
            Value::Array(repos) => Ok(repos),
            _ => Err(PortfolioError::Shape { expected: "array" }),
        }
    }
}
