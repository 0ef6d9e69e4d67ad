use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub released_at: DateTime<Utc>,
    /// Minutes
    pub duration: i32,
    pub genre: String,
    pub language: String,
    pub created_by: Uuid,
    /// Mean of all rating scores, 0.0 without ratings. Written only by the
    /// rating aggregator.
    pub average_rating: f64,
    /// Independent counter; the aggregator does not maintain it.
    pub total_rating: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields a user supplies when adding a movie.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDraft {
    pub title: String,
    pub description: String,
    pub released_at: DateTime<Utc>,
    pub duration: i32,
    pub genre: String,
    pub language: String,
}

impl MovieDraft {
    pub fn validate(&self) -> AppResult<()> {
        Validator::validate_movie_title(&self.title)?;
        Validator::validate_duration(self.duration)?;
        Validator::validate_label("Genre", &self.genre)?;
        Validator::validate_label("Language", &self.language)?;
        Ok(())
    }
}

/// Partial update. Derived rating fields and ownership are not editable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub released_at: Option<DateTime<Utc>>,
    pub duration: Option<i32>,
    pub genre: Option<String>,
    pub language: Option<String>,
}

impl MovieChanges {
    pub fn validate(&self) -> AppResult<()> {
        if let Some(title) = &self.title {
            Validator::validate_movie_title(title)?;
        }
        if let Some(duration) = self.duration {
            Validator::validate_duration(duration)?;
        }
        if let Some(genre) = &self.genre {
            Validator::validate_label("Genre", genre)?;
        }
        if let Some(language) = &self.language {
            Validator::validate_label("Language", language)?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Movie {
    pub fn new(created_by: Uuid, draft: MovieDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            released_at: draft.released_at,
            duration: draft.duration,
            genre: draft.genre,
            language: draft.language,
            created_by,
            average_rating: 0.0,
            total_rating: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.created_by == user_id
    }

    pub fn apply(&mut self, changes: MovieChanges) {
        if changes.is_empty() {
            return;
        }

        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(released_at) = changes.released_at {
            self.released_at = released_at;
        }
        if let Some(duration) = changes.duration {
            self.duration = duration;
        }
        if let Some(genre) = changes.genre {
            self.genre = genre;
        }
        if let Some(language) = changes.language {
            self.language = language;
        }
        self.updated_at = Utc::now();
    }
}
