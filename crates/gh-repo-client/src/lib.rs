//! GitHub API client for listing a user's public repositories
//!
//! This crate provides a trait-based client so the application can swap the
//! real API implementation for a test double.
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_repo_client::{FetchLimits, GitHubClient, OctocrabClient};
//! use std::sync::Arc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! // Anonymous access is enough for public repositories
//! let octocrab = octocrab::Octocrab::builder().build()?;
//! let client = OctocrabClient::new(Arc::new(octocrab), FetchLimits::default());
//!
//! let repos = client.fetch_user_repos("octocat").await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod octocrab_client;

pub use client::{FetchLimits, GitHubClient};
pub use octocrab_client::OctocrabClient;

// Re-export octocrab so consumers don't need to depend on it directly
pub use octocrab;
