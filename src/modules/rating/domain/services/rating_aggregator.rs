use serde::Serialize;

use crate::modules::rating::domain::value_objects::score::Score;

/// Aggregate derived from the full set of a movie's scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingSummary {
    pub average: f64,
    pub count: usize,
}

impl RatingSummary {
    pub fn empty() -> Self {
        Self {
            average: 0.0,
            count: 0,
        }
    }
}

/// Mean over every stored score of a movie (0.0 when there are none).
#[derive(Debug, Default, Clone, Copy)]
pub struct RatingAggregator;

impl RatingAggregator {
    pub fn summarize(scores: &[Score]) -> RatingSummary {
        if scores.is_empty() {
            return RatingSummary::empty();
        }

        let sum: i64 = scores.iter().map(|s| i64::from(s.value())).sum();
        RatingSummary {
            average: sum as f64 / scores.len() as f64,
            count: scores.len(),
        }
    }
}
