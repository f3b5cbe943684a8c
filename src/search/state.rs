use std::fmt::Display;

use crate::{error::AppResult, models::RecommendationList};

/// Shown when the service answered but had nothing to suggest
pub const NO_RESULTS_MESSAGE: &str = "No recommendations found. Try another movie! Example: Matilda (1996) or Monty Python and the Holy Grail (1974)";

/// Shown for any transport or server failure; details go to the log only
pub const FETCH_FAILED_MESSAGE: &str = "Error fetching recommendations.";

/// Everything the UI can observe about a search
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchState {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// The latest submitted search is in flight
    Loading,
    /// The service returned at least one title
    Success(RecommendationList),
    /// The service answered without usable recommendations
    Empty(String),
    /// The request failed; holds the user-facing message
    Failed(String),
}

impl SearchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading)
    }
}

impl Display for SearchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchState::Idle => write!(f, "idle"),
            SearchState::Loading => write!(f, "loading"),
            SearchState::Success(list) => write!(f, "success({})", list.len()),
            SearchState::Empty(_) => write!(f, "empty"),
            SearchState::Failed(_) => write!(f, "failed"),
        }
    }
}

/// Resolution of a single dispatched search
#[derive(Debug)]
pub enum SearchOutcome {
    Found(RecommendationList),
    NoResults,
    Failed,
}

impl SearchOutcome {
    /// Classifies a service result; the error itself is dropped here, so
    /// callers log it before converting.
    pub fn from_result(result: AppResult<RecommendationList>) -> Self {
        match result {
            Ok(list) if list.is_empty() => SearchOutcome::NoResults,
            Ok(list) => SearchOutcome::Found(list),
            Err(_) => SearchOutcome::Failed,
        }
    }
}

impl From<SearchOutcome> for SearchState {
    fn from(outcome: SearchOutcome) -> Self {
        match outcome {
            SearchOutcome::Found(list) => SearchState::Success(list),
            SearchOutcome::NoResults => SearchState::Empty(NO_RESULTS_MESSAGE.to_string()),
            SearchOutcome::Failed => SearchState::Failed(FETCH_FAILED_MESSAGE.to_string()),
        }
    }
}
