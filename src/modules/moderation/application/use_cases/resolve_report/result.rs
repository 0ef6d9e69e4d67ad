use serde::Serialize;
use uuid::Uuid;

use crate::modules::moderation::domain::ReportStatus;

/// Confirmation of a resolution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolveReportResult {
    pub report_id: Uuid,
    pub previous_status: ReportStatus,
    pub status: ReportStatus,
    pub message: String,
}

impl ResolveReportResult {
    pub fn new(report_id: Uuid, previous_status: ReportStatus, status: ReportStatus) -> Self {
        Self {
            report_id,
            previous_status,
            status,
            message: format!("Report {} successfully.", status.as_str().to_lowercase()),
        }
    }
}
