use serde::Serialize;

use crate::modules::moderation::domain::MovieReport;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ListPendingReportsResult {
    pub reports: Vec<MovieReport>,
}
