//! Octocrab-based GitHub API client
//!
//! Direct implementation of the `GitHubClient` trait. Uses octocrab's raw
//! route support because the user-repos listing with explicit paging
//! parameters maps more directly onto the REST route than onto octocrab's
//! typed builders, and the payload deserializes straight into `RepoRecord`.

use std::sync::Arc;

use async_trait::async_trait;
use gh_tech_tags::RepoRecord;
use log::debug;
use octocrab::Octocrab;

use crate::client::{FetchLimits, GitHubClient};

/// Direct GitHub API client using octocrab
#[derive(Debug, Clone)]
pub struct OctocrabClient {
    octocrab: Arc<Octocrab>,
    limits: FetchLimits,
}

impl OctocrabClient {
    /// Create a new client with the given octocrab instance and page bounds
    pub fn new(octocrab: Arc<Octocrab>, limits: FetchLimits) -> Self {
        Self { octocrab, limits }
    }

    /// Get a reference to the underlying octocrab instance
    pub fn octocrab(&self) -> &Octocrab {
        &self.octocrab
    }
}

#[async_trait]
impl GitHubClient for OctocrabClient {
    async fn fetch_user_repos(&self, username: &str) -> anyhow::Result<Vec<RepoRecord>> {
        debug!("Fetching repositories for {}", username);

        let per_page = self.limits.per_page.clamp(1, 100);
        let mut repos: Vec<RepoRecord> = Vec::new();

        for page in 1..=self.limits.max_pages.max(1) {
            let route = format!(
                "/users/{}/repos?per_page={}&page={}",
                username, per_page, page
            );
            let batch: Vec<RepoRecord> = self.octocrab.get(route, None::<&()>).await?;
            let batch_len = batch.len();
            repos.extend(batch);

            // A short page is the last page
            if batch_len < per_page as usize {
                break;
            }
        }

        debug!("Fetched {} repositories for {}", repos.len(), username);
        Ok(repos)
    }
}
