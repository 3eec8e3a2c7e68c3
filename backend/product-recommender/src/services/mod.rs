pub mod feedback;
pub mod ranking;
pub mod similarity;

pub use feedback::FeedbackAdjuster;
pub use ranking::RecommendationRanker;
pub use similarity::similarity;
