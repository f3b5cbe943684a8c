pub mod recommendations;

pub use recommendations::{HttpRecommendationService, RecommendationService};

#[cfg(test)]
pub use recommendations::MockRecommendationService;
