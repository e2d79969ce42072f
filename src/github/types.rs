// GitHub repository types.
// Projects raw API objects onto the entries shown in the projects section.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Shown when a repository has no description.
pub const DEFAULT_DESCRIPTION: &str = "No description provided.";

/// Public repository as rendered on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryEntry {
    pub name: String,
    pub description: String,
    pub url: String,
    pub language: Option<String>,
    pub stars: u64,
    #[serde(default)]
    pub topics: Vec<String>,
    pub updated_at: String,
}

impl RepositoryEntry {
    /// Build an entry from one element of the repository listing.
    ///
    /// Returns `None` for private, forked or archived repositories and for
    /// objects without a usable name or URL.
    pub fn from_api(raw: &Value) -> Option<Self> {
        let repo = raw.as_object()?;

        let flagged = |field: &str| repo.get(field).is_some_and(is_truthy);
        if flagged("private") || flagged("fork") || flagged("archived") {
            return None;
        }

        let name = non_empty_str(repo.get("name"))?;
        let url = non_empty_str(repo.get("html_url"))?;

        let description = non_empty_str(repo.get("description"))
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());
        let language = non_empty_str(repo.get("language"));
        let stars = repo
            .get("stargazers_count")
            .and_then(Value::as_u64)
            .unwrap_or(0);
        let topics = repo
            .get("topics")
            .and_then(Value::as_array)
            .map(|topics| {
                topics
                    .iter()
                    .filter_map(|t| t.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();
        let updated_at = non_empty_str(repo.get("pushed_at"))
            .or_else(|| non_empty_str(repo.get("updated_at")))
            .unwrap_or_default();

        Some(Self {
            name,
            description,
            url,
            language,
            stars,
            topics,
            updated_at,
        })
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// JSON truthiness: `null`, `false`, `0`, `""`, `[]` and `{}` are false.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_projects_full_entry() {
        let raw = json!({
            "name": "homelab",
            "description": "Ansible for the rack",
            "html_url": "https://github.com/Dprimc/homelab",
            "language": "Shell",
            "stargazers_count": 7,
            "topics": ["ansible", "proxmox"],
            "pushed_at": "2024-05-02T10:00:00Z",
            "updated_at": "2024-04-01T10:00:00Z",
            "private": false,
            "fork": false,
            "archived": false
        });

        let entry = RepositoryEntry::from_api(&raw).unwrap();
        assert_eq!(entry.name, "homelab");
        assert_eq!(entry.description, "Ansible for the rack");
        assert_eq!(entry.language.as_deref(), Some("Shell"));
        assert_eq!(entry.stars, 7);
        assert_eq!(entry.topics, vec!["ansible", "proxmox"]);
        assert_eq!(entry.updated_at, "2024-05-02T10:00:00Z");
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let raw = json!({
            "name": "scripts",
            "html_url": "https://github.com/Dprimc/scripts",
            "description": null,
            "language": null,
            "updated_at": "2024-04-01T10:00:00Z"
        });

        let entry = RepositoryEntry::from_api(&raw).unwrap();
        assert_eq!(entry.description, DEFAULT_DESCRIPTION);
        assert_eq!(entry.language, None);
        assert_eq!(entry.stars, 0);
        assert!(entry.topics.is_empty());
        assert_eq!(entry.updated_at, "2024-04-01T10:00:00Z");
    }

    #[test]
    fn test_skips_flagged_repositories() {
        for flag in ["private", "fork", "archived"] {
            let mut raw = json!({"name": "x", "html_url": "https://github.com/u/x"});
            raw[flag] = json!(true);
            assert!(RepositoryEntry::from_api(&raw).is_none(), "{flag} should be skipped");
        }
    }

    #[test]
    fn test_skips_entries_without_name_or_url() {
        assert!(RepositoryEntry::from_api(&json!({"html_url": "https://github.com/u/x"})).is_none());
        assert!(RepositoryEntry::from_api(&json!({"name": "x"})).is_none());
        assert!(RepositoryEntry::from_api(&json!({"name": "", "html_url": "u"})).is_none());
        assert!(RepositoryEntry::from_api(&json!("not an object")).is_none());
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(0)));
        assert!(is_truthy(&json!(1)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!("yes")));
    }
}
