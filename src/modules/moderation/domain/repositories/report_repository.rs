use crate::modules::moderation::domain::{
    entities::movie_report::MovieReport, value_objects::report_status::ReportStatus,
};
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportRepository: Send + Sync {
    async fn create(&self, report: &MovieReport) -> AppResult<MovieReport>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<MovieReport>>;

    /// Reports in `status`, oldest first
    async fn list_by_status(&self, status: ReportStatus) -> AppResult<Vec<MovieReport>>;

    /// Returns `None` when no report has this id
    async fn update_status(
        &self,
        id: Uuid,
        status: ReportStatus,
    ) -> AppResult<Option<MovieReport>>;
}
