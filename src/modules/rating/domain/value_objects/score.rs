use serde::Serialize;

use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

/// A single user score, always within 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Score(i16);

impl Score {
    pub fn new(value: i32) -> AppResult<Self> {
        Validator::validate_score(value)?;
        Ok(Self(value as i16))
    }

    pub fn value(&self) -> i16 {
        self.0
    }
}

impl TryFrom<i32> for Score {
    type Error = AppError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Score::new(value)
    }
}

impl TryFrom<i16> for Score {
    type Error = AppError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        Score::new(i32::from(value))
    }
}

impl From<Score> for f64 {
    fn from(score: Score) -> Self {
        f64::from(score.0)
    }
}
