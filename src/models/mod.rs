pub mod recommendation;

pub use recommendation::RecommendationList;
