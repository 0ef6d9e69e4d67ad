use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::errors::AppError;

/// Lifecycle of a movie report. `Pending` is the initial state;
/// `Approved` and `Rejected` are terminal.
#[derive(
    diesel_derive_enum::DbEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[ExistingTypePath = "crate::schema::sql_types::ReportStatus"]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportStatus {
    Pending,
    Approved,
    Rejected,
}

impl ReportStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ReportStatus::Approved | ReportStatus::Rejected)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "PENDING",
            ReportStatus::Approved => "APPROVED",
            ReportStatus::Rejected => "REJECTED",
        }
    }

    /// Parses a target status for resolution. Only terminal states are
    /// accepted; `PENDING` is not a resolution.
    pub fn parse_resolution(raw: &str) -> Result<Self, AppError> {
        match raw.parse::<ReportStatus>()? {
            status if status.is_terminal() => Ok(status),
            _ => Err(invalid_status(raw)),
        }
    }
}

fn invalid_status(raw: &str) -> AppError {
    AppError::ValidationError(format!(
        "Invalid status value '{}': expected APPROVED or REJECTED",
        raw
    ))
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Ok(ReportStatus::Pending),
            "APPROVED" => Ok(ReportStatus::Approved),
            "REJECTED" => Ok(ReportStatus::Rejected),
            _ => Err(invalid_status(s)),
        }
    }
}
