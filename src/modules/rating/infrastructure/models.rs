use crate::modules::rating::domain::{Rating, Score};
use crate::schema::ratings;
use crate::shared::errors::AppError;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

// For reading from database
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = ratings)]
pub struct RatingModel {
    pub id: Uuid,
    pub movie_id: Uuid,
    pub user_id: Uuid,
    pub score: i16,
    pub created_at: DateTime<Utc>,
}

// For inserting new ratings
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = ratings)]
pub struct NewRating {
    pub id: Uuid,
    pub movie_id: Uuid,
    pub user_id: Uuid,
    pub score: i16,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<RatingModel> for Rating {
    type Error = AppError;

    fn try_from(model: RatingModel) -> Result<Self, Self::Error> {
        Ok(Rating {
            id: model.id,
            movie_id: model.movie_id,
            user_id: model.user_id,
            score: Score::try_from(model.score)?,
            created_at: model.created_at,
        })
    }
}

impl From<&Rating> for NewRating {
    fn from(rating: &Rating) -> Self {
        NewRating {
            id: rating.id,
            movie_id: rating.movie_id,
            user_id: rating.user_id,
            score: rating.score.value(),
            created_at: rating.created_at,
        }
    }
}
