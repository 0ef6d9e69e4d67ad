use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::application::use_cases::{SubmitRatingCommand, SubmitRatingResult};
use crate::commands::{AppJson, AppPath, AppState, MessageResponse};
use crate::modules::identity::{Authorized, Caller};
use crate::shared::errors::AppResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateMovieRequest {
    pub score: i32,
}

pub async fn rate_movie(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    AppPath(movie_id): AppPath<Uuid>,
    AppJson(request): AppJson<RateMovieRequest>,
) -> AppResult<Json<MessageResponse<SubmitRatingResult>>> {
    let result = state
        .submit_rating
        .execute(Authorized::new(
            caller,
            SubmitRatingCommand::new(movie_id, request.score),
        ))
        .await?;

    Ok(Json(MessageResponse::new(
        "Rating submitted successfully",
        result,
    )))
}
