use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::modules::moderation::domain::value_objects::report_status::ReportStatus;
use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieReport {
    pub id: Uuid,
    pub movie_id: Uuid,
    /// Reporter
    pub user_id: Uuid,
    pub reason: String,
    pub status: ReportStatus,
    pub reported_at: DateTime<Utc>,
}

impl MovieReport {
    /// New report in `Pending`. The reason is stored trimmed.
    pub fn file(movie_id: Uuid, user_id: Uuid, reason: &str) -> AppResult<Self> {
        Validator::validate_report_reason(reason)?;

        Ok(Self {
            id: Uuid::new_v4(),
            movie_id,
            user_id,
            reason: reason.trim().to_string(),
            status: ReportStatus::Pending,
            reported_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::errors::AppError;

    #[test]
    fn filed_reports_start_pending() {
        let report = MovieReport::file(Uuid::new_v4(), Uuid::new_v4(), "  spam  ").unwrap();
        assert_eq!(report.status, ReportStatus::Pending);
        assert_eq!(report.reason, "spam");
    }

    #[test]
    fn blank_reason_is_rejected() {
        assert!(matches!(
            MovieReport::file(Uuid::new_v4(), Uuid::new_v4(), "   "),
            Err(AppError::ValidationError(_))
        ));
    }
}
