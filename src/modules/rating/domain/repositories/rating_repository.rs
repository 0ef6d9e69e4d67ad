use crate::modules::rating::domain::{
    entities::rating::Rating, services::rating_aggregator::RatingSummary,
    value_objects::score::Score,
};
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use uuid::Uuid;

/// A stored rating together with the aggregate it produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRating {
    pub rating: Rating,
    pub summary: RatingSummary,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RatingRepository: Send + Sync {
    /// Insert `rating` and rewrite its movie's `average_rating` from every
    /// stored score, atomically and serialized per movie. Fails with
    /// `NotFound` when the movie does not exist, leaving nothing written.
    async fn record(&self, rating: &Rating) -> AppResult<RecordedRating>;

    async fn scores_for_movie(&self, movie_id: Uuid) -> AppResult<Vec<Score>>;
}
