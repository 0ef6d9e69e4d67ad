use async_trait::async_trait;
use std::sync::Arc;

use crate::log_info;
use crate::modules::identity::Authorized;
use crate::modules::rating::domain::{Rating, RatingRepository, Score};
use crate::shared::{application::UseCase, errors::AppResult};

use super::{command::SubmitRatingCommand, result::SubmitRatingResult};

/// Use case handler for rating a movie
pub struct SubmitRatingHandler {
    rating_repository: Arc<dyn RatingRepository>,
}

impl SubmitRatingHandler {
    pub fn new(rating_repository: Arc<dyn RatingRepository>) -> Self {
        Self { rating_repository }
    }
}

#[async_trait]
impl UseCase<Authorized<SubmitRatingCommand>, SubmitRatingResult> for SubmitRatingHandler {
    async fn execute(
        &self,
        request: Authorized<SubmitRatingCommand>,
    ) -> AppResult<SubmitRatingResult> {
        let Authorized { caller, command } = request;

        // Range check happens before anything is written
        let score = Score::new(command.score)?;
        let rating = Rating::new(command.movie_id, caller.user_id, score);

        let recorded = self.rating_repository.record(&rating).await?;

        log_info!(
            "User {} rated movie {} with {} (average now {:.2} over {} ratings)",
            caller.username,
            command.movie_id,
            score.value(),
            recorded.summary.average,
            recorded.summary.count
        );

        Ok(SubmitRatingResult::from(recorded))
    }
}
