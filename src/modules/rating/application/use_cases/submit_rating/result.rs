use serde::Serialize;

use crate::modules::rating::domain::{Rating, RecordedRating};

/// Result of submitting a rating
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmitRatingResult {
    pub rating: Rating,
    pub average_rating: f64,
    pub rating_count: usize,
}

impl From<RecordedRating> for SubmitRatingResult {
    fn from(recorded: RecordedRating) -> Self {
        Self {
            rating: recorded.rating,
            average_rating: recorded.summary.average,
            rating_count: recorded.summary.count,
        }
    }
}
