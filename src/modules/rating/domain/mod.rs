pub mod entities;
pub mod repositories;
pub mod services;
pub mod value_objects;

pub use entities::rating::Rating;
pub use repositories::rating_repository::{RatingRepository, RecordedRating};
pub use services::rating_aggregator::{RatingAggregator, RatingSummary};
pub use value_objects::score::Score;
