//! GitHub Operations Middleware
//!
//! Central middleware for all GitHub API interactions:
//! - Client initialization (on BootstrapStart)
//! - Repository loading (fetch_user_repos) with a fetch timeout
//! - Browser integration for the selected repository

use std::sync::Arc;
use std::time::Duration;

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{AppState, LoadingState};
use gh_repo_client::{octocrab::Octocrab, FetchLimits, GitHubClient, OctocrabClient};
use tokio::runtime::Runtime;

/// A slow endpoint must not wedge the UI; one attempt gets this long
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Middleware for all GitHub API operations
pub struct GitHubMiddleware {
    /// Tokio runtime for async operations
    runtime: Runtime,
    /// GitHub client (initialized on BootstrapStart)
    client: Option<Arc<dyn GitHubClient>>,
}

impl GitHubMiddleware {
    /// Create a new GitHub middleware
    pub fn new() -> Self {
        let runtime = Runtime::new().expect("Failed to create tokio runtime");

        Self {
            runtime,
            client: None,
        }
    }

    /// Initialize the GitHub client
    fn initialize_client(&mut self, state: &AppState) {
        let limits = FetchLimits {
            per_page: state.config.page_size,
            max_pages: state.config.max_pages,
        };

        match init_client(limits) {
            Ok(client) => {
                log::info!("GitHubMiddleware: GitHub client initialized");
                self.client = Some(Arc::new(client));
            }
            Err(e) => {
                log::warn!("GitHubMiddleware: GitHub client not initialized: {}", e);
            }
        }
    }

    /// Handle loading the configured user's repositories
    fn handle_repos_load(&self, state: &AppState, dispatcher: &Dispatcher) -> bool {
        // Single-flight: while an attempt is running, further requests are dropped
        if state.browse.loading_state == LoadingState::Loading {
            log::info!("ReposLoadStart ignored: a fetch is already in flight");
            return false;
        }

        let Some(client) = self.client.clone() else {
            log::error!("ReposLoadStart: client not initialized");
            dispatcher.dispatch(Action::ReposLoadError(
                "GitHub client not initialized".to_string(),
            ));
            return false;
        };

        let username = state.config.username.clone();
        let dispatcher = dispatcher.clone();

        log::info!("Spawning async task to load repositories for {}", username);

        self.runtime.spawn(async move {
            match tokio::time::timeout(FETCH_TIMEOUT, client.fetch_user_repos(&username)).await {
                Ok(Ok(repos)) => {
                    log::info!("Loaded {} repositories for {}", repos.len(), username);
                    dispatcher.dispatch(Action::ReposLoaded(repos));
                }
                Ok(Err(e)) => {
                    log::error!("Failed to load repositories for {}: {}", username, e);
                    dispatcher.dispatch(Action::ReposLoadError(e.to_string()));
                }
                Err(_) => {
                    log::error!(
                        "Fetch for {} timed out after {}s",
                        username,
                        FETCH_TIMEOUT.as_secs()
                    );
                    dispatcher.dispatch(Action::ReposLoadError(format!(
                        "timed out after {}s",
                        FETCH_TIMEOUT.as_secs()
                    )));
                }
            }
        });

        true // Let action pass through to reducer (to set loading state)
    }
}

impl Default for GitHubMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for GitHubMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            // Initialize client on bootstrap, then kick off the first load
            Action::BootstrapStart => {
                self.initialize_client(state);
                dispatcher.dispatch(Action::ReposLoadStart);
                true // Let action pass through
            }

            Action::ReposLoadStart => self.handle_repos_load(state, dispatcher),

            Action::OpenInBrowser => {
                let Some(card) = state.browse.current_card() else {
                    log::warn!("No repository selected for opening in browser");
                    return false;
                };
                let url = card.record.html_url.clone();
                if url.is_empty() {
                    log::warn!("Selected repository has no html_url");
                    return false;
                }

                log::info!("Opening {} in browser", url);

                self.runtime.spawn(async move {
                    #[cfg(target_os = "macos")]
                    let _ = tokio::process::Command::new("open").arg(&url).spawn();

                    #[cfg(target_os = "linux")]
                    let _ = tokio::process::Command::new("xdg-open").arg(&url).spawn();

                    #[cfg(target_os = "windows")]
                    let _ = tokio::process::Command::new("cmd")
                        .args(["/C", "start", &url])
                        .spawn();
                });
                false // Consume action
            }

            _ => true, // Pass through other actions
        }
    }
}

/// Initialize the GitHub client
///
/// The user-repos endpoint is public, so a token is optional; when one is
/// present in the environment it buys rate-limit headroom.
fn init_client(limits: FetchLimits) -> anyhow::Result<OctocrabClient> {
    let token = std::env::var("GITHUB_TOKEN")
        .or_else(|_| std::env::var("GH_TOKEN"))
        .ok();

    let mut builder = Octocrab::builder();
    if let Some(token) = token {
        log::debug!("Using GitHub token from environment");
        builder = builder.personal_token(token);
    } else {
        log::debug!("No GitHub token found, using anonymous access");
    }

    let octocrab = builder.build()?;
    Ok(OctocrabClient::new(Arc::new(octocrab), limits))
}
