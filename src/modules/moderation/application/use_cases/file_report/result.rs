use serde::Serialize;

use crate::modules::moderation::domain::MovieReport;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileReportResult {
    pub report: MovieReport,
}
