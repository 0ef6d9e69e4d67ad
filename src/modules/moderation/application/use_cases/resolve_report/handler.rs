use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::identity::Authorized;
use crate::modules::moderation::domain::{ReportRepository, ReportStatus};
use crate::shared::{
    application::UseCase,
    errors::{AppError, AppResult},
};
use crate::{log_info, log_warn};

use super::{command::ResolveReportCommand, result::ResolveReportResult};

/// Unguarded; wrap in `RequireCapability::administrator` before exposing.
///
/// Resolution is unconditional: an already approved or rejected report
/// is overwritten with the requested status.
pub struct ResolveReportHandler {
    report_repository: Arc<dyn ReportRepository>,
}

impl ResolveReportHandler {
    pub fn new(report_repository: Arc<dyn ReportRepository>) -> Self {
        Self { report_repository }
    }
}

fn report_not_found() -> AppError {
    AppError::NotFound("Report not found".to_string())
}

#[async_trait]
impl UseCase<Authorized<ResolveReportCommand>, ResolveReportResult> for ResolveReportHandler {
    async fn execute(
        &self,
        request: Authorized<ResolveReportCommand>,
    ) -> AppResult<ResolveReportResult> {
        let Authorized { caller, command } = request;
        let target = ReportStatus::parse_resolution(&command.status)?;
        let report_id = Uuid::parse_str(command.report_id.trim()).map_err(|_| {
            AppError::ValidationError(format!("Invalid report id '{}'", command.report_id))
        })?;

        let current = self
            .report_repository
            .find_by_id(report_id)
            .await?
            .ok_or_else(report_not_found)?;

        if current.status.is_terminal() {
            log_warn!(
                "Report {} already {}, overwriting with {} (by {})",
                current.id,
                current.status,
                target,
                caller.username
            );
        }

        let updated = self
            .report_repository
            .update_status(report_id, target)
            .await?
            .ok_or_else(report_not_found)?;

        log_info!(
            "Report {} resolved {} -> {} by {}",
            updated.id,
            current.status,
            updated.status,
            caller.username
        );

        Ok(ResolveReportResult::new(
            updated.id,
            current.status,
            updated.status,
        ))
    }
}
