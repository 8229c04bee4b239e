pub mod filter_bar;
pub mod repo_card;
pub mod status_bar;

pub use filter_bar::{FilterBarViewModel, FilterToggleViewModel};
pub use repo_card::RepoCardViewModel;
pub use status_bar::StatusBarViewModel;
