use axum::{extract::State, http::StatusCode, Extension, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::domain::{Movie, MovieChanges, MovieDraft};
use crate::commands::{AppJson, AppPath, AppQuery, AppState, MessageResponse};
use crate::modules::identity::Caller;
use crate::shared::application::{PaginatedResult, PaginationParams};
use crate::shared::errors::AppResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMovieRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub released_at: DateTime<Utc>,
    pub duration: i32,
    pub genre: String,
    pub language: String,
}

impl From<CreateMovieRequest> for MovieDraft {
    fn from(request: CreateMovieRequest) -> Self {
        MovieDraft {
            title: request.title,
            description: request.description,
            released_at: request.released_at,
            duration: request.duration,
            genre: request.genre,
            language: request.language,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMovieRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub released_at: Option<DateTime<Utc>>,
    pub duration: Option<i32>,
    pub genre: Option<String>,
    pub language: Option<String>,
}

impl From<UpdateMovieRequest> for MovieChanges {
    fn from(request: UpdateMovieRequest) -> Self {
        MovieChanges {
            title: request.title,
            description: request.description,
            released_at: request.released_at,
            duration: request.duration,
            genre: request.genre,
            language: request.language,
        }
    }
}

pub async fn list_movies(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PaginationParams>,
) -> AppResult<Json<PaginatedResult<Movie>>> {
    state.movies.list_movies(params).await.map(Json)
}

pub async fn list_user_movies(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
) -> AppResult<Json<Vec<Movie>>> {
    state.movies.list_user_movies(&caller).await.map(Json)
}

pub async fn create_movie(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    AppJson(request): AppJson<CreateMovieRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse<Movie>>)> {
    let movie = state.movies.create_movie(&caller, request.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Movie created successfully!", movie)),
    ))
}

pub async fn get_movie(
    State(state): State<AppState>,
    AppPath(movie_id): AppPath<Uuid>,
) -> AppResult<Json<Movie>> {
    state.movies.get_movie(movie_id).await.map(Json)
}

pub async fn update_movie(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    AppPath(movie_id): AppPath<Uuid>,
    AppJson(request): AppJson<UpdateMovieRequest>,
) -> AppResult<Json<Movie>> {
    state
        .movies
        .update_movie(&caller, movie_id, request.into())
        .await
        .map(Json)
}
