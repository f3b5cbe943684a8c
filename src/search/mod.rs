pub mod controller;
pub mod state;

pub use controller::SearchController;
pub use state::{SearchOutcome, SearchState, FETCH_FAILED_MESSAGE, NO_RESULTS_MESSAGE};
