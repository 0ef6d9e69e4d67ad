use std::sync::Arc;

use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use uuid::Uuid;

use super::models::{NewRating, RatingModel};
use crate::modules::rating::domain::{
    Rating, RatingAggregator, RatingRepository, RecordedRating, Score,
};
use crate::schema::{movies, ratings};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::{with_connection, Database};
use crate::shared::utils::TimedOperation;
use crate::{log_debug, log_warn};

pub struct RatingRepositoryImpl {
    db: Arc<Database>,
}

impl RatingRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

fn load_scores(conn: &mut PgConnection, movie_id: Uuid) -> AppResult<Vec<Score>> {
    let raw: Vec<i16> = ratings::table
        .filter(ratings::movie_id.eq(movie_id))
        .select(ratings::score)
        .load(conn)?;

    raw.into_iter().map(Score::try_from).collect()
}

#[async_trait]
impl RatingRepository for RatingRepositoryImpl {
    async fn record(&self, rating: &Rating) -> AppResult<RecordedRating> {
        let new_rating = NewRating::from(rating);

        with_connection(&self.db, move |conn| {
            let timer = TimedOperation::new("record_rating");

            let recorded = conn.transaction::<_, AppError, _>(|conn| {
                // Lock the movie row; concurrent raters of one movie queue here
                let locked = movies::table
                    .find(new_rating.movie_id)
                    .select(movies::id)
                    .for_update()
                    .first::<Uuid>(conn)
                    .optional()?;

                if locked.is_none() {
                    log_warn!("Rating rejected, movie {} not found", new_rating.movie_id);
                    return Err(AppError::NotFound("Movie not found".to_string()));
                }

                let saved = diesel::insert_into(ratings::table)
                    .values(&new_rating)
                    .returning(RatingModel::as_returning())
                    .get_result::<RatingModel>(conn)?;

                let scores = load_scores(conn, new_rating.movie_id)?;
                let summary = RatingAggregator::summarize(&scores);

                // total_rating is left alone
                diesel::update(movies::table.find(new_rating.movie_id))
                    .set(movies::average_rating.eq(summary.average))
                    .execute(conn)?;

                Ok(RecordedRating {
                    rating: Rating::try_from(saved)?,
                    summary,
                })
            })?;

            timer.finish_with_info(&format!(
                "movie={} ratings={}",
                recorded.rating.movie_id, recorded.summary.count
            ));
            log_debug!(
                "Average for movie {} recomputed to {}",
                recorded.rating.movie_id,
                recorded.summary.average
            );

            Ok(recorded)
        })
        .await
    }

    async fn scores_for_movie(&self, movie_id: Uuid) -> AppResult<Vec<Score>> {
        with_connection(&self.db, move |conn| load_scores(conn, movie_id)).await
    }
}
