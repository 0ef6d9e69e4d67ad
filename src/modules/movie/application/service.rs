use super::super::domain::{Movie, MovieChanges, MovieDraft, MovieRepository};
use crate::modules::identity::Caller;
use crate::shared::application::{PaginatedResult, PaginationParams};
use crate::shared::errors::{AppError, AppResult};
use crate::{log_debug, log_info};
use std::sync::Arc;
use uuid::Uuid;

pub struct MovieService {
    movie_repo: Arc<dyn MovieRepository>,
}

impl MovieService {
    pub fn new(movie_repo: Arc<dyn MovieRepository>) -> Self {
        Self { movie_repo }
    }

    pub async fn create_movie(&self, caller: &Caller, draft: MovieDraft) -> AppResult<Movie> {
        draft.validate()?;

        let movie = Movie::new(caller.user_id, draft);
        let saved = self.movie_repo.save(&movie).await?;

        log_info!("User {} created movie {} ({})", caller.user_id, saved.id, saved.title);
        Ok(saved)
    }

    pub async fn get_movie(&self, id: Uuid) -> AppResult<Movie> {
        self.movie_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Movie not found".to_string()))
    }

    pub async fn list_movies(&self, params: PaginationParams) -> AppResult<PaginatedResult<Movie>> {
        params.validate()?;

        let items = self.movie_repo.list(params.offset(), params.limit()).await?;
        let total = self.movie_repo.count().await?;

        Ok(PaginatedResult::new(items, total, &params))
    }

    pub async fn list_user_movies(&self, caller: &Caller) -> AppResult<Vec<Movie>> {
        self.movie_repo.list_by_owner(caller.user_id).await
    }

    /// Creator-only partial update
    pub async fn update_movie(
        &self,
        caller: &Caller,
        id: Uuid,
        changes: MovieChanges,
    ) -> AppResult<Movie> {
        let mut movie = self.get_movie(id).await?;

        if !movie.is_owned_by(caller.user_id) {
            return Err(AppError::Forbidden(
                "Only the creator can update this movie".to_string(),
            ));
        }

        changes.validate()?;
        if changes.is_empty() {
            log_debug!("Empty update for movie {}, nothing to persist", id);
            return Ok(movie);
        }

        movie.apply(changes);
        let updated = self.movie_repo.update(&movie).await?;

        log_info!("Movie {} updated by its creator", id);
        Ok(updated)
    }
}
