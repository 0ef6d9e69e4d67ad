use async_trait::async_trait;
use std::sync::Arc;

use crate::log_debug;
use crate::modules::identity::Authorized;
use crate::modules::moderation::domain::{ReportRepository, ReportStatus};
use crate::shared::{application::Query, errors::AppResult};

use super::{query::ListPendingReportsQuery, result::ListPendingReportsResult};

/// Unguarded; wrap in `RequireCapability::administrator` before exposing.
pub struct ListPendingReportsHandler {
    report_repository: Arc<dyn ReportRepository>,
}

impl ListPendingReportsHandler {
    pub fn new(report_repository: Arc<dyn ReportRepository>) -> Self {
        Self { report_repository }
    }
}

#[async_trait]
impl Query<Authorized<ListPendingReportsQuery>, ListPendingReportsResult>
    for ListPendingReportsHandler
{
    async fn execute(
        &self,
        request: Authorized<ListPendingReportsQuery>,
    ) -> AppResult<ListPendingReportsResult> {
        let reports = self
            .report_repository
            .list_by_status(ReportStatus::Pending)
            .await?;

        log_debug!(
            "Admin {} listed {} pending reports",
            request.caller.username,
            reports.len()
        );

        Ok(ListPendingReportsResult { reports })
    }
}
