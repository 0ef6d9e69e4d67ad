use async_trait::async_trait;
use std::sync::Arc;

use crate::log_info;
use crate::modules::identity::Authorized;
use crate::modules::moderation::domain::{MovieReport, ReportRepository};
use crate::modules::movie::MovieRepository;
use crate::shared::{
    application::UseCase,
    errors::{AppError, AppResult},
};

use super::{command::FileReportCommand, result::FileReportResult};

/// Any authenticated user may report a movie, repeatedly if they like.
pub struct FileReportHandler {
    report_repository: Arc<dyn ReportRepository>,
    movie_repository: Arc<dyn MovieRepository>,
}

impl FileReportHandler {
    pub fn new(
        report_repository: Arc<dyn ReportRepository>,
        movie_repository: Arc<dyn MovieRepository>,
    ) -> Self {
        Self {
            report_repository,
            movie_repository,
        }
    }
}

#[async_trait]
impl UseCase<Authorized<FileReportCommand>, FileReportResult> for FileReportHandler {
    async fn execute(&self, request: Authorized<FileReportCommand>) -> AppResult<FileReportResult> {
        let Authorized { caller, command } = request;

        let report = MovieReport::file(command.movie_id, caller.user_id, &command.reason)?;

        if !self.movie_repository.exists(command.movie_id).await? {
            return Err(AppError::NotFound("Movie not found".to_string()));
        }

        let saved = self.report_repository.create(&report).await?;

        log_info!(
            "User {} reported movie {} (report {})",
            caller.username,
            saved.movie_id,
            saved.id
        );

        Ok(FileReportResult { report: saved })
    }
}
