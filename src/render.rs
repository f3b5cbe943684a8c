use crate::search::SearchState;

pub const LOADING_TEXT: &str = "Loading recommendations...";
pub const RESULTS_HEADING: &str = "Recommended Movies:";

/// Renders a search state as terminal text
///
/// `Idle` renders as nothing; everything else renders to at least one line.
pub fn render(state: &SearchState) -> String {
    match state {
        SearchState::Idle => String::new(),
        SearchState::Loading => LOADING_TEXT.to_string(),
        SearchState::Success(list) => {
            let items: String = list.iter().map(|title| format!("\n  - {}", title)).collect();
            format!("{}{}", RESULTS_HEADING, items)
        }
        SearchState::Empty(msg) | SearchState::Failed(msg) => msg.clone(),
    }
}
