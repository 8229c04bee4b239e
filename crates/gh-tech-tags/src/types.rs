//! Repository data transfer objects
//!
//! `RepoRecord` mirrors the GitHub REST representation of a repository so it
//! deserializes directly from the API JSON. It is an immutable value: records
//! are replaced wholesale on every refetch, and classification is re-derived
//! from them on demand.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A repository as returned by the GitHub API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoRecord {
    /// Repository id (stable across renames)
    pub id: u64,

    /// Repository name
    pub name: String,

    /// Free-text description (absent for many repositories)
    pub description: Option<String>,

    /// Primary language as detected by GitHub
    pub language: Option<String>,

    /// Topic list; the list endpoint omits the field entirely when empty
    #[serde(default)]
    pub topics: Vec<String>,

    /// When the repository was created
    pub created_at: DateTime<Utc>,

    /// Whether the repository is a fork
    #[serde(default)]
    pub fork: bool,

    /// Whether the repository is private
    #[serde(default)]
    pub private: bool,

    /// Star count
    #[serde(default)]
    pub stargazers_count: u64,

    /// Web URL for opening in browser
    pub html_url: String,

    /// Homepage URL, if the owner set one
    pub homepage: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_from_api_json() {
        // Trimmed-down shape of one element of GET /users/{username}/repos
        let json = r#"{
            "id": 1296269,
            "name": "hello-world",
            "full_name": "octocat/hello-world",
            "description": "My first repository",
            "language": "Ruby",
            "topics": ["octocat", "api"],
            "created_at": "2011-01-26T19:01:12Z",
            "fork": false,
            "private": false,
            "stargazers_count": 80,
            "html_url": "https://github.com/octocat/hello-world",
            "homepage": "https://octocat.github.io"
        }"#;

        let repo: RepoRecord = serde_json::from_str(json).unwrap();
        assert_eq!(repo.id, 1296269);
        assert_eq!(repo.name, "hello-world");
        assert_eq!(repo.language.as_deref(), Some("Ruby"));
        assert_eq!(repo.topics, vec!["octocat", "api"]);
        assert_eq!(repo.stargazers_count, 80);
        assert!(!repo.fork);
    }

    #[test]
    fn test_deserialize_with_missing_optional_fields() {
        // topics omitted, description and homepage null
        let json = r#"{
            "id": 2,
            "name": "bare",
            "description": null,
            "language": null,
            "created_at": "2020-05-01T00:00:00Z",
            "fork": true,
            "private": false,
            "stargazers_count": 0,
            "html_url": "https://github.com/octocat/bare",
            "homepage": null
        }"#;

        let repo: RepoRecord = serde_json::from_str(json).unwrap();
        assert!(repo.description.is_none());
        assert!(repo.language.is_none());
        assert!(repo.topics.is_empty());
        assert!(repo.fork);
    }

    #[test]
    fn test_serialization_round_trip() {
        let repo = RepoRecord {
            id: 42,
            name: "my-next-app".to_string(),
            description: Some("A Next.js playground".to_string()),
            language: Some("TypeScript".to_string()),
            topics: vec!["nextjs".to_string()],
            created_at: Utc::now(),
            fork: false,
            private: false,
            stargazers_count: 7,
            html_url: "https://github.com/octocat/my-next-app".to_string(),
            homepage: None,
        };

        let json = serde_json::to_string(&repo).unwrap();
        let parsed: RepoRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.id, 42);
        assert_eq!(parsed.name, "my-next-app");
        assert_eq!(parsed.topics, vec!["nextjs"]);
    }
}
