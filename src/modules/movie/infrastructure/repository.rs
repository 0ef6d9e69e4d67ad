use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use uuid::Uuid;

use super::models::{MovieChangeset, MovieModel, NewMovie};
use crate::log_debug;
use crate::modules::movie::domain::{Movie, MovieRepository};
use crate::schema::movies;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::{with_connection, Database};

pub struct MovieRepositoryImpl {
    db: Arc<Database>,
}

impl MovieRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MovieRepository for MovieRepositoryImpl {
    async fn save(&self, movie: &Movie) -> AppResult<Movie> {
        let new_movie = NewMovie::from(movie);

        with_connection(&self.db, move |conn| {
            log_debug!("INSERTING movie: {}", new_movie.title);
            let saved = diesel::insert_into(movies::table)
                .values(&new_movie)
                .returning(MovieModel::as_returning())
                .get_result(conn)
                .map_err(|e| AppError::DatabaseError(format!("Failed to save movie: {}", e)))?;
            Ok(Movie::from(saved))
        })
        .await
    }

    async fn update(&self, movie: &Movie) -> AppResult<Movie> {
        let id = movie.id;
        let changes = MovieChangeset::from(movie);

        with_connection(&self.db, move |conn| {
            let updated = diesel::update(movies::table.find(id))
                .set(&changes)
                .returning(MovieModel::as_returning())
                .get_result(conn)
                .optional()?
                .ok_or_else(|| AppError::NotFound("Movie not found".to_string()))?;
            Ok(Movie::from(updated))
        })
        .await
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Movie>> {
        with_connection(&self.db, move |conn| {
            let movie = movies::table
                .find(id)
                .select(MovieModel::as_select())
                .first::<MovieModel>(conn)
                .optional()?;
            Ok(movie.map(Movie::from))
        })
        .await
    }

    async fn exists(&self, id: Uuid) -> AppResult<bool> {
        with_connection(&self.db, move |conn| {
            let found = diesel::select(diesel::dsl::exists(movies::table.find(id)))
                .get_result::<bool>(conn)?;
            Ok(found)
        })
        .await
    }

    async fn list(&self, offset: i64, limit: i64) -> AppResult<Vec<Movie>> {
        with_connection(&self.db, move |conn| {
            let rows = movies::table
                .order(movies::created_at.desc())
                .offset(offset)
                .limit(limit)
                .select(MovieModel::as_select())
                .load::<MovieModel>(conn)?;
            Ok(rows.into_iter().map(Movie::from).collect())
        })
        .await
    }

    async fn count(&self) -> AppResult<u64> {
        with_connection(&self.db, move |conn| {
            let total: i64 = movies::table.count().get_result(conn)?;
            Ok(total.max(0) as u64)
        })
        .await
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Movie>> {
        with_connection(&self.db, move |conn| {
            let rows = movies::table
                .filter(movies::created_by.eq(owner_id))
                .order(movies::created_at.desc())
                .select(MovieModel::as_select())
                .load::<MovieModel>(conn)?;
            Ok(rows.into_iter().map(Movie::from).collect())
        })
        .await
    }
}
