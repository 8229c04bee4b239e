//! GitHub client trait and fetch limits
//!
//! `GitHubClient` is the interface the application talks to; the octocrab
//! implementation is the only production one, but the trait keeps the TUI
//! testable without network access.

use async_trait::async_trait;
use gh_tech_tags::RepoRecord;

/// Pagination bounds for the repository listing
///
/// The listing stops at the first empty or short page, or when `max_pages`
/// pages have been fetched, whichever comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchLimits {
    /// Repositories per page (GitHub caps this at 100)
    pub per_page: u8,
    /// Upper bound on pages fetched in one attempt
    pub max_pages: u32,
}

impl Default for FetchLimits {
    fn default() -> Self {
        Self {
            per_page: 100,
            max_pages: 10,
        }
    }
}

/// GitHub API client
///
/// Implementations must be `Send + Sync` so the client can be shared with the
/// async task that runs the fetch.
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// Fetch all public repositories of a user, across pages
    ///
    /// Returns the raw records in API order; ordering and filtering are the
    /// caller's concern. A non-success response or transport failure is an
    /// error for the whole attempt.
    async fn fetch_user_repos(&self, username: &str) -> anyhow::Result<Vec<RepoRecord>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = FetchLimits::default();
        assert_eq!(limits.per_page, 100);
        assert_eq!(limits.max_pages, 10);
    }
}
