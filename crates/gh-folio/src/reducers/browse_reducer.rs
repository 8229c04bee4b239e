//! Browse reducer
//!
//! State transitions for the repository list: the load lifecycle
//! (Idle -> Loading -> Loaded | Error), the classify-then-rank pipeline on a
//! successful fetch, filter toggling and cursor movement.

use crate::actions::Action;
use crate::state::{BrowseState, LoadingState, RepoCard};
use gh_folio_config::AppConfig;
use gh_tech_tags::{classify, rank, RepoRecord, RuleSet};

/// Reduce browse state based on an action
pub fn reduce_browse(
    mut state: BrowseState,
    action: &Action,
    config: &AppConfig,
    rules: &RuleSet,
) -> BrowseState {
    match action {
        Action::ReposLoadStart => {
            state.loading_state = LoadingState::Loading;
            log::debug!("Repository loading started for {}", config.username);
        }

        Action::ReposLoaded(records) => {
            state.cards = build_cards(records.clone(), config, rules);
            state.loading_state = LoadingState::Loaded;
            state.last_updated = Some(chrono::Local::now());
            state.cursor = 0;
            log::info!(
                "Loaded {} repositories ({} after exclusions)",
                records.len(),
                state.cards.len()
            );
        }

        Action::ReposLoadError(error) => {
            // Previously loaded cards stay visible; only the status changes
            state.loading_state = LoadingState::Error(error.clone());
            log::error!("Failed to load repositories: {}", error);
        }

        Action::FilterToggle(label) => {
            state.selection.toggle(label);
            state.cursor = 0;
            log::debug!("Filter selection now {:?}", state.selection.labels());
        }

        Action::FilterClear => {
            state.selection.clear();
            state.cursor = 0;
        }

        Action::NavNext => {
            let len = state.visible_len();
            if len > 0 {
                state.cursor = (state.cursor + 1) % len;
            }
        }

        Action::NavPrevious => {
            let len = state.visible_len();
            if len > 0 {
                state.cursor = if state.cursor == 0 {
                    len - 1
                } else {
                    state.cursor - 1
                };
            }
        }

        Action::NavToTop => {
            state.cursor = 0;
        }

        Action::NavToBottom => {
            state.cursor = state.visible_len().saturating_sub(1);
        }

        _ => {}
    }

    state
}

/// The fetch-result pipeline: exclude, classify, rank
///
/// Forks and private repositories are dropped unless configured otherwise,
/// the exclusion list is applied, every surviving record is classified, and
/// the collection is ranked (pins first, then newest first).
fn build_cards(records: Vec<RepoRecord>, config: &AppConfig, rules: &RuleSet) -> Vec<RepoCard> {
    let kept: Vec<RepoRecord> = records
        .into_iter()
        .filter(|r| !r.private)
        .filter(|r| config.include_forks || !r.fork)
        .filter(|r| !config.is_excluded(&r.name))
        .collect();

    rank(kept, &config.pin_list())
        .into_iter()
        .map(|record| {
            let labels = classify(&record, rules);
            RepoCard { record, labels }
        })
        .collect()
}
