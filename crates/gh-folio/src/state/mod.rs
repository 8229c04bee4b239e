pub mod app;
pub mod browse;

pub use app::AppState;
pub use browse::{BrowseState, LoadingState, RepoCard};
