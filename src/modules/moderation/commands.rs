use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::application::use_cases::{
    FileReportCommand, ListPendingReportsQuery, ListPendingReportsResult, ResolveReportCommand,
    ResolveReportResult,
};
use super::domain::MovieReport;
use crate::commands::{AppJson, AppPath, AppState, MessageResponse};
use crate::modules::identity::{Authorized, Caller};
use crate::shared::errors::AppResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMovieRequest {
    #[serde(default)]
    pub reason: String,
}

/// Fields are optional and kept raw so a non-administrator gets `Forbidden`
/// however incomplete the body is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolveReportRequest {
    #[serde(default)]
    pub report_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ManageReportRequest {
    #[serde(default)]
    pub status: Option<String>,
}

pub async fn report_movie(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    AppPath(movie_id): AppPath<Uuid>,
    AppJson(request): AppJson<ReportMovieRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse<MovieReport>>)> {
    let result = state
        .file_report
        .execute(Authorized::new(
            caller,
            FileReportCommand::new(movie_id, request.reason),
        ))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(
            "Movie reported successfully",
            result.report,
        )),
    ))
}

pub async fn list_pending_reports(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
) -> AppResult<Json<ListPendingReportsResult>> {
    state
        .list_pending_reports
        .execute(Authorized::new(caller, ListPendingReportsQuery))
        .await
        .map(Json)
}

pub async fn manage_reported_movies(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    AppJson(request): AppJson<ResolveReportRequest>,
) -> AppResult<Json<ResolveReportResult>> {
    let command = ResolveReportCommand::new(
        request.report_id.unwrap_or_default(),
        request.status.unwrap_or_default(),
    );
    resolve(&state, caller, command).await
}

pub async fn manage_movie_report(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    AppPath(report_id): AppPath<String>,
    AppJson(request): AppJson<ManageReportRequest>,
) -> AppResult<Json<ResolveReportResult>> {
    let command = ResolveReportCommand::new(report_id, request.status.unwrap_or_default());
    resolve(&state, caller, command).await
}

async fn resolve(
    state: &AppState,
    caller: Caller,
    command: ResolveReportCommand,
) -> AppResult<Json<ResolveReportResult>> {
    state
        .resolve_report
        .execute(Authorized::new(caller, command))
        .await
        .map(Json)
}
