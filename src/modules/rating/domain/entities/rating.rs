use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::modules::rating::domain::value_objects::score::Score;

/// One user's score for one movie. A user may hold several ratings for
/// the same movie; every stored rating counts toward the average.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rating {
    pub id: Uuid,
    pub movie_id: Uuid,
    pub user_id: Uuid,
    pub score: Score,
    pub created_at: DateTime<Utc>,
}

impl Rating {
    pub fn new(movie_id: Uuid, user_id: Uuid, score: Score) -> Self {
        Self {
            id: Uuid::new_v4(),
            movie_id,
            user_id,
            score,
            created_at: Utc::now(),
        }
    }
}
