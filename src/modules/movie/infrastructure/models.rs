use crate::modules::movie::domain::Movie;
use crate::schema::movies;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

// ============= MOVIE MODELS =============

// For reading from database
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = movies)]
pub struct MovieModel {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub released_at: DateTime<Utc>,
    pub duration: i32,
    pub genre: String,
    pub language: String,
    pub created_by: Uuid,
    pub average_rating: f64,
    pub total_rating: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// For inserting new movies
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = movies)]
pub struct NewMovie {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub released_at: DateTime<Utc>,
    pub duration: i32,
    pub genre: String,
    pub language: String,
    pub created_by: Uuid,
    pub average_rating: f64,
    pub total_rating: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// For updating editable fields (excludes ownership and rating aggregate)
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = movies)]
pub struct MovieChangeset {
    pub title: String,
    pub description: String,
    pub released_at: DateTime<Utc>,
    pub duration: i32,
    pub genre: String,
    pub language: String,
    pub updated_at: DateTime<Utc>,
}

impl From<MovieModel> for Movie {
    fn from(model: MovieModel) -> Self {
        Movie {
            id: model.id,
            title: model.title,
            description: model.description,
            released_at: model.released_at,
            duration: model.duration,
            genre: model.genre,
            language: model.language,
            created_by: model.created_by,
            average_rating: model.average_rating,
            total_rating: model.total_rating,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<&Movie> for NewMovie {
    fn from(movie: &Movie) -> Self {
        NewMovie {
            id: movie.id,
            title: movie.title.clone(),
            description: movie.description.clone(),
            released_at: movie.released_at,
            duration: movie.duration,
            genre: movie.genre.clone(),
            language: movie.language.clone(),
            created_by: movie.created_by,
            average_rating: movie.average_rating,
            total_rating: movie.total_rating,
            created_at: movie.created_at,
            updated_at: movie.updated_at,
        }
    }
}

impl From<&Movie> for MovieChangeset {
    fn from(movie: &Movie) -> Self {
        MovieChangeset {
            title: movie.title.clone(),
            description: movie.description.clone(),
            released_at: movie.released_at,
            duration: movie.duration,
            genre: movie.genre.clone(),
            language: movie.language.clone(),
            updated_at: movie.updated_at,
        }
    }
}
