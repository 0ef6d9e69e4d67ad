use std::time::Instant;

use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};

use super::state::AppState;
use crate::modules::{
    identity::commands::authenticate, moderation::commands::*, movie::commands::*,
    rating::commands::*,
};
use crate::shared::utils::LogContext;

/// Single source of truth for every route the service exposes.
/// All routes sit behind bearer authentication.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Movie commands
        .route("/movies", get(list_movies).post(create_movie))
        .route("/movies/user", get(list_user_movies))
        .route("/movies/{movie_id}", get(get_movie).put(update_movie))
        // Rating commands
        .route("/movies/{movie_id}/rate", post(rate_movie))
        // Moderation commands
        .route("/movies/{movie_id}/report", post(report_movie))
        .route(
            "/movies/reports/manage",
            get(list_pending_reports).patch(manage_reported_movies),
        )
        .route("/movie_reports/{report_id}/manage", post(manage_movie_report))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(req).await;

    LogContext::request(
        method.as_str(),
        &path,
        response.status().as_u16(),
        started.elapsed(),
    );
    response
}
