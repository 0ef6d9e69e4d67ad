//! Rating aggregation: stores user scores and keeps each movie's
//! `average_rating` equal to the mean of its stored scores.
pub mod application;
pub mod commands;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::use_cases::{SubmitRatingCommand, SubmitRatingHandler, SubmitRatingResult};
pub use domain::{
    Rating, RatingAggregator, RatingRepository, RatingSummary, RecordedRating, Score,
};
pub use infrastructure::RatingRepositoryImpl;
